//! Display functions for command results

use super::formatters::{board_rows, percent_bar, turn_line};
use crate::commands::{ComparisonRow, ExperimentResult, GameResult, Summary};
use colored::Colorize;

/// Print the turn-by-turn trace of one game
pub fn print_game_trace(game: &GameResult) {
    println!("\n{}", format!("Game {}", game.index + 1).bright_cyan().bold());

    let rows = board_rows(&game.board, &game.turns);
    for (row, turn) in rows.iter().zip(&game.turns) {
        println!("{}", turn_line(row, turn));
    }

    if game.won() {
        println!("{}", "Game Over. WON!!!".green().bold());
    } else {
        println!("{}", "Game Over. LOST!!!".red().bold());
    }
}

/// Print every recorded game of an experiment
pub fn print_traces(result: &ExperimentResult) {
    for game in &result.games {
        print_game_trace(game);
    }
}

/// Print the statistics of an experiment
pub fn print_summary(result: &ExperimentResult, summary: &Summary, full_stats: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " Stats after {} games with strategy {} ",
        summary.games,
        result.strategy.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if summary.is_empty() {
        println!("\n   No games played.");
    } else {
        println!(
            "\n   Won:  {:6} {}",
            summary.won,
            format!("({:.1}%)", summary.won_pct).green()
        );
        println!(
            "   Lost: {:6} {}",
            summary.lost,
            format!("({:.1}%)", summary.lost_pct).red()
        );
        println!("   Average folded: {:.2}", summary.average_folded);
    }

    println!("   Seed:           {}", result.seed);
    println!("   Time elapsed:   {:.3}s", result.duration.as_secs_f64());

    if full_stats {
        print_loss_breakdown(summary);
    }
}

/// Print lost games grouped by fields left open
pub fn print_loss_breakdown(summary: &Summary) {
    println!(
        "\n📉 {}",
        "Lost games by fields left:".bright_cyan().bold()
    );

    if summary.losses_by_remaining.is_empty() {
        println!("   No lost games.");
        return;
    }

    for (left, bucket) in &summary.losses_by_remaining {
        let bar = percent_bar(bucket.pct_of_losses, 40);
        println!(
            "   {left:2}: {} {:6} ({:5.1}%)",
            bar.red(),
            bucket.count,
            bucket.pct_of_losses
        );
    }
}

/// Print a strategy ranking
pub fn print_comparison(rows: &[ComparisonRow], games: usize, seed: u64) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({games} games each, seed {seed}) ",
        "STRATEGY COMPARISON".bright_cyan().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!();

    for (rank, row) in rows.iter().enumerate() {
        let bar = percent_bar(row.summary.won_pct, 30);
        println!(
            "   {}. {:10} {} {:5.1}% won  {:.3}s",
            rank + 1,
            row.strategy,
            bar.green(),
            row.summary.won_pct,
            row.duration.as_secs_f64()
        );
    }
}
