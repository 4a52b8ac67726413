//! Mermaid's Bar - CLI
//!
//! Plays the dice-folding bar game many times with a chosen strategy and
//! prints win/loss statistics.

use anyhow::{Context, Result};
use clap::Parser;
use mermaids_bar::{
    commands::{ExperimentConfig, compare_strategies, run_experiment, summarize},
    core::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE},
    output::{print_comparison, print_summary, print_traces},
    strategy::{DEFAULT_STRATEGY, lookup},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "mermaids_bar",
    about = "Simulate the Mermaid's Bar dice game and compare folding strategies",
    version,
    author
)]
struct Cli {
    /// Strategy: min_prob (default), min_die, max_die, rand_die
    #[arg(short, long, default_value = DEFAULT_STRATEGY)]
    strategy: String,

    /// Print every turn of every game
    #[arg(short, long)]
    verbose: bool,

    /// Number of games to play
    #[arg(short = 'n', value_name = "GAMES", default_value_t = 10)]
    games: usize,

    /// Break lost games down by fields left open
    #[arg(short = 'f', long = "full_stats")]
    full_stats: bool,

    /// Number of fields on the board
    #[arg(
        long,
        default_value_t = DEFAULT_BOARD_SIZE,
        value_parser = clap::value_parser!(u8).range(1..=i64::from(MAX_BOARD_SIZE))
    )]
    board_size: u8,

    /// Seed for the dice (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads (defaults to one per core)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Run every strategy and rank them
    #[arg(long, conflicts_with = "strategy")]
    compare: bool,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    if let Some(jobs) = cli.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .context("failed to start worker threads")?;
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    let config = ExperimentConfig {
        games: cli.games,
        board_size: cli.board_size,
        seed,
        record_turns: cli.verbose && !cli.compare,
        show_progress: !cli.verbose,
    };

    if cli.compare {
        run_compare_command(&config)
    } else {
        run_experiment_command(&cli.strategy, &config, cli.full_stats)
    }
}

fn run_experiment_command(
    strategy_name: &str,
    config: &ExperimentConfig,
    full_stats: bool,
) -> Result<()> {
    let strategy = lookup(strategy_name)?;
    let result = run_experiment(strategy, config).context("simulation failed")?;

    if config.record_turns {
        print_traces(&result);
    }

    let summary = summarize(&result.games);
    print_summary(&result, &summary, full_stats);
    Ok(())
}

fn run_compare_command(config: &ExperimentConfig) -> Result<()> {
    let rows = compare_strategies(config).context("simulation failed")?;
    print_comparison(&rows, config.games, config.seed);
    Ok(())
}
