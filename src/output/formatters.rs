//! Formatting utilities for terminal output

use crate::core::Board;
use crate::strategy::Turn;

/// Render a board row as it looked before each turn of a game
///
/// The first entry is the starting board, each later entry follows one more
/// fold. Board size is taken from `board`.
#[must_use]
pub fn board_rows(board: &Board, turns: &[Turn]) -> Vec<String> {
    let Ok(mut replay) = Board::new(board.size()) else {
        return Vec::new();
    };

    let mut rows = Vec::with_capacity(turns.len());
    for turn in turns {
        rows.push(replay.to_string());
        if let Some(field) = turn.folded {
            // Replaying a finished game's own folds cannot fail
            let _ = replay.fold(field);
        }
    }
    rows
}

/// Format a per-turn trace line
#[must_use]
pub fn turn_line(row: &str, turn: &Turn) -> String {
    match turn.folded {
        Some(field) => format!("Board: {row}; Throw: {}; Folded: {field}", turn.throw),
        None => format!("Board: {row}; Throw: {}; Folded: Nothing!", turn.throw),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a percentage in 0-100
#[must_use]
pub fn percent_bar(pct: f64, width: usize) -> String {
    create_progress_bar(pct, 100.0, width)
}
