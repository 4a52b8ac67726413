//! Mermaid's Bar
//!
//! Simulator for a dice-folding bar game: fold the numbers 1-9 using either
//! die or their sum until the board is shut or a throw leaves nothing to fold.
//!
//! # Quick Start
//!
//! ```rust
//! use mermaids_bar::commands::{ExperimentConfig, run_experiment, summarize};
//! use mermaids_bar::strategy::lookup;
//!
//! let strategy = lookup("min_prob").unwrap();
//! let result = run_experiment(strategy, &ExperimentConfig::new(1_000, 42)).unwrap();
//! let summary = summarize(&result.games);
//! println!("won {:.1}%", summary.won_pct);
//! ```

// Core domain types
pub mod core;

// Play strategies and the game loop
pub mod strategy;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
