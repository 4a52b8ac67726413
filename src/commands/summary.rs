//! Win/loss statistics over finished games

use super::experiment::GameResult;
use std::collections::BTreeMap;

/// Lost games that ended with the same number of open fields
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossBucket {
    pub count: usize,
    /// Share of all lost games, 0-100
    pub pct_of_losses: f64,
}

/// Aggregate statistics of an experiment
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub games: usize,
    pub won: usize,
    pub lost: usize,
    pub won_pct: f64,
    pub lost_pct: f64,
    /// Mean number of fields folded per game
    pub average_folded: f64,
    /// Keyed by fields left open at the forfeit
    pub losses_by_remaining: BTreeMap<usize, LossBucket>,
}

impl Summary {
    /// True when no games were played
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.games == 0
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Summarize finished games
///
/// An empty slice yields zero counts and 0% everywhere.
#[must_use]
pub fn summarize(results: &[GameResult]) -> Summary {
    let games = results.len();
    let won = results.iter().filter(|g| g.won()).count();
    let lost = games - won;

    let mut loss_counts: BTreeMap<usize, usize> = BTreeMap::new();
    for game in results.iter().filter(|g| !g.won()) {
        *loss_counts.entry(game.fields_left()).or_insert(0) += 1;
    }

    let losses_by_remaining = loss_counts
        .into_iter()
        .map(|(left, count)| {
            (
                left,
                LossBucket {
                    count,
                    pct_of_losses: percent(count, lost),
                },
            )
        })
        .collect();

    let total_folded: usize = results.iter().map(|g| g.board.fold_sequence().len()).sum();
    let average_folded = if games == 0 {
        0.0
    } else {
        total_folded as f64 / games as f64
    };

    Summary {
        games,
        won,
        lost,
        won_pct: percent(won, games),
        lost_pct: percent(lost, games),
        average_folded,
        losses_by_remaining,
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::commands::{ExperimentConfig, run_experiment};
    use crate::core::Board;
    use crate::strategy::lookup;

    fn game(index: usize, folds: &[u8], forfeit: bool) -> GameResult {
        let mut board = Board::new(9).unwrap();
        for &field in folds {
            board.fold(field).unwrap();
        }
        if forfeit {
            board.forfeit();
        }
        GameResult {
            index,
            board,
            turns: Vec::new(),
        }
    }

    #[test]
    fn empty_results() {
        let summary = summarize(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.won, 0);
        assert_eq!(summary.lost, 0);
        assert_eq!(summary.won_pct, 0.0);
        assert_eq!(summary.lost_pct, 0.0);
        assert_eq!(summary.average_folded, 0.0);
        assert!(summary.losses_by_remaining.is_empty());
    }

    #[test]
    fn counts_and_percentages() {
        let results = vec![
            game(0, &[1, 2, 3, 4, 5, 6, 7, 8, 9], false),
            game(1, &[6, 3], true),
            game(2, &[9, 8, 7], true),
            game(3, &[6, 3], true),
        ];
        let summary = summarize(&results);

        assert!(!summary.is_empty());
        assert_eq!(summary.games, 4);
        assert_eq!(summary.won, 1);
        assert_eq!(summary.lost, 3);
        assert_eq!(summary.won_pct, 25.0);
        assert_eq!(summary.lost_pct, 75.0);
        assert_eq!(summary.average_folded, 16.0 / 4.0);

        assert_eq!(summary.losses_by_remaining.len(), 2);
        let seven = summary.losses_by_remaining[&7];
        assert_eq!(seven.count, 2);
        assert!((seven.pct_of_losses - 200.0 / 3.0).abs() < 1e-9);
        let six = summary.losses_by_remaining[&6];
        assert_eq!(six.count, 1);
        assert!((six.pct_of_losses - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn all_wins_have_no_loss_breakdown() {
        let results = vec![game(0, &[1, 2, 3, 4, 5, 6, 7, 8, 9], false)];
        let summary = summarize(&results);
        assert_eq!(summary.won_pct, 100.0);
        assert_eq!(summary.lost_pct, 0.0);
        assert!(summary.losses_by_remaining.is_empty());
    }

    #[test]
    fn breakdown_sums_to_losses() {
        let strategy = lookup("rand_die").unwrap();
        let result = run_experiment(strategy, &ExperimentConfig::new(500, 77)).unwrap();
        let summary = summarize(&result.games);

        assert_eq!(summary.won + summary.lost, 500);
        assert!((summary.won_pct + summary.lost_pct - 100.0).abs() < 1e-9);

        let counted: usize = summary.losses_by_remaining.values().map(|b| b.count).sum();
        assert_eq!(counted, summary.lost);
        if summary.lost > 0 {
            let pct: f64 = summary
                .losses_by_remaining
                .values()
                .map(|b| b.pct_of_losses)
                .sum();
            assert!((pct - 100.0).abs() < 1e-9);
        }
        // A lost game always has at least one open field
        assert!(!summary.losses_by_remaining.contains_key(&0));
    }
}
