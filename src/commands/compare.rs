//! Compare command
//!
//! Runs every registered strategy under the same configuration and ranks
//! them by win rate.

use super::experiment::{ExperimentConfig, run_experiment};
use super::summary::{Summary, summarize};
use crate::core::BoardError;
use crate::strategy::STRATEGIES;
use std::time::Duration;

/// One strategy's row in a comparison
#[derive(Debug, Clone)]
pub struct ComparisonRow {
    pub strategy: &'static str,
    pub summary: Summary,
    pub duration: Duration,
}

/// Run all strategies with `config`, best win rate first
///
/// Ties keep registration order.
///
/// # Errors
///
/// Returns the first `BoardError` any experiment hits.
pub fn compare_strategies(config: &ExperimentConfig) -> Result<Vec<ComparisonRow>, BoardError> {
    let mut rows = STRATEGIES
        .iter()
        .map(|strategy| {
            let result = run_experiment(strategy, config)?;
            Ok(ComparisonRow {
                strategy: result.strategy,
                summary: summarize(&result.games),
                duration: result.duration,
            })
        })
        .collect::<Result<Vec<_>, BoardError>>()?;

    // Stable sort keeps registration order on ties
    rows.sort_by(|a, b| b.summary.won.cmp(&a.summary.won));
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_strategy_appears_once() {
        let rows = compare_strategies(&ExperimentConfig::new(100, 3)).unwrap();
        assert_eq!(rows.len(), STRATEGIES.len());

        let mut names: Vec<&str> = rows.iter().map(|r| r.strategy).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["max_die", "min_die", "min_prob", "rand_die"]);
        assert!(rows.iter().all(|r| r.summary.games == 100));
    }

    #[test]
    fn rows_ranked_by_wins() {
        let rows = compare_strategies(&ExperimentConfig::new(300, 11)).unwrap();
        for pair in rows.windows(2) {
            assert!(pair[0].summary.won >= pair[1].summary.won);
        }
    }

    #[test]
    fn zero_games_keeps_registration_order() {
        let rows = compare_strategies(&ExperimentConfig::new(0, 0)).unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.strategy).collect();
        assert_eq!(names, vec!["min_prob", "min_die", "max_die", "rand_die"]);
        assert!(rows.iter().all(|r| r.summary.is_empty()));
    }
}
