//! Experiment command
//!
//! Plays many independent games with one strategy.

use crate::core::{Board, BoardError, DEFAULT_BOARD_SIZE, FairDice};
use crate::strategy::{Player, Strategy, Turn};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for an experiment
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    pub games: usize,
    pub board_size: u8,
    /// Game `i` uses an RNG seeded with `seed + i`
    pub seed: u64,
    /// Keep every turn of every game (needed for verbose traces)
    pub record_turns: bool,
    pub show_progress: bool,
}

impl ExperimentConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            board_size: DEFAULT_BOARD_SIZE,
            seed,
            record_turns: false,
            show_progress: false,
        }
    }
}

/// A finished game
#[derive(Debug, Clone)]
pub struct GameResult {
    pub index: usize,
    pub board: Board,
    /// Empty unless the experiment recorded turns
    pub turns: Vec<Turn>,
}

impl GameResult {
    #[must_use]
    pub fn won(&self) -> bool {
        self.board.has_won()
    }

    #[must_use]
    pub fn fields_left(&self) -> usize {
        self.board.remaining_fields().len()
    }
}

/// Result of an experiment, games in index order
#[derive(Debug)]
pub struct ExperimentResult {
    pub strategy: &'static str,
    pub seed: u64,
    pub games: Vec<GameResult>,
    pub duration: Duration,
}

/// Play `config.games` games with `strategy`, spread over the rayon pool
///
/// # Errors
///
/// Returns a `BoardError` if the board size is invalid or a strategy folds
/// an illegal field.
///
/// # Examples
/// ```
/// use mermaids_bar::commands::{ExperimentConfig, run_experiment};
/// use mermaids_bar::strategy::lookup;
///
/// let strategy = lookup("min_prob").unwrap();
/// let result = run_experiment(strategy, &ExperimentConfig::new(50, 7)).unwrap();
/// assert_eq!(result.games.len(), 50);
/// assert!(result.games.iter().all(|g| g.board.is_over()));
/// ```
pub fn run_experiment(
    strategy: &'static Strategy,
    config: &ExperimentConfig,
) -> Result<ExperimentResult, BoardError> {
    // Fail before spawning work
    Board::new(config.board_size)?;

    tracing::debug!(
        strategy = strategy.name,
        games = config.games,
        board_size = config.board_size,
        seed = config.seed,
        "starting experiment"
    );

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb.set_message(strategy.name);
        pb
    } else {
        ProgressBar::hidden()
    };

    let player = Player::new(strategy);
    let start = Instant::now();

    let games = (0..config.games)
        .into_par_iter()
        .map(|index| {
            let result = play_game(&player, index, config);
            pb.inc(1);
            result
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_and_clear();
    let duration = start.elapsed();

    tracing::info!(
        strategy = strategy.name,
        games = games.len(),
        elapsed_ms = duration.as_millis() as u64,
        "experiment finished"
    );

    Ok(ExperimentResult {
        strategy: strategy.name,
        seed: config.seed,
        games,
        duration,
    })
}

fn play_game(
    player: &Player<'_>,
    index: usize,
    config: &ExperimentConfig,
) -> Result<GameResult, BoardError> {
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(index as u64));
    let mut board = Board::new(config.board_size)?;
    let mut turns = player.play(&mut board, &mut FairDice, &mut rng)?;

    if !config.record_turns {
        turns = Vec::new();
    }

    Ok(GameResult {
        index,
        board,
        turns,
    })
}
