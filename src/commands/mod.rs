//! Command implementations

pub mod compare;
pub mod experiment;
pub mod summary;

pub use compare::{ComparisonRow, compare_strategies};
pub use experiment::{ExperimentConfig, ExperimentResult, GameResult, run_experiment};
pub use summary::{LossBucket, Summary, summarize};
