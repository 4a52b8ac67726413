//! Game board
//!
//! A Board tracks which numbers are still open and the order they were folded in.

use super::candidates::Candidates;
use super::dice::Throw;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Board size used by the bar game
pub const DEFAULT_BOARD_SIZE: u8 = 9;

/// Largest number two six-sided dice can produce
pub const MAX_BOARD_SIZE: u8 = 12;

/// Why a fold was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldRejection {
    OutOfRange,
    AlreadyFolded,
    GameOver,
}

impl fmt::Display for FoldRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange => write!(f, "field is not on the board"),
            Self::AlreadyFolded => write!(f, "field is already folded"),
            Self::GameOver => write!(f, "game is already over"),
        }
    }
}

/// Error type for board misuse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("field {field} is not on a board of size {board_size}")]
    InvalidField { field: u8, board_size: u8 },
    #[error("cannot fold {field}: {reason}")]
    InvalidFold { field: u8, reason: FoldRejection },
    #[error("board size must be between 1 and {max}, got {0}", max = MAX_BOARD_SIZE)]
    InvalidBoardSize(u8),
    #[error("die face must be between 1 and 6, got {0}")]
    InvalidDieFace(u8),
}

/// State of a single game
///
/// `remaining` and `fold_sequence` always partition `1..=size`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    remaining: BTreeSet<u8>,
    fold_sequence: Vec<u8>,
    over: bool,
}

impl Board {
    /// Create a board with every field from 1 to `size` open
    ///
    /// # Errors
    /// Returns `BoardError::InvalidBoardSize` unless `1 <= size <= 12`.
    ///
    /// # Examples
    /// ```
    /// use mermaids_bar::core::Board;
    ///
    /// let board = Board::new(9).unwrap();
    /// assert_eq!(board.remaining_fields().len(), 9);
    /// assert!(!board.is_over());
    ///
    /// assert!(Board::new(0).is_err());
    /// ```
    pub fn new(size: u8) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidBoardSize(size));
        }

        Ok(Self {
            size,
            remaining: (1..=size).collect(),
            fold_sequence: Vec::with_capacity(usize::from(size)),
            over: false,
        })
    }

    /// Number of fields the board started with
    #[inline]
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    fn contains(&self, field: u8) -> bool {
        (1..=self.size).contains(&field)
    }

    /// Check whether `field` has been folded
    ///
    /// # Errors
    /// Returns `BoardError::InvalidField` if `field` is not on the board.
    pub fn is_folded(&self, field: u8) -> Result<bool, BoardError> {
        if !self.contains(field) {
            return Err(BoardError::InvalidField {
                field,
                board_size: self.size,
            });
        }
        Ok(!self.remaining.contains(&field))
    }

    /// Fold `field`, ending the game with a win if it was the last open one
    ///
    /// # Errors
    /// Returns `BoardError::InvalidFold` if the field is off the board,
    /// already folded, or the game is over (checked in that order).
    pub fn fold(&mut self, field: u8) -> Result<(), BoardError> {
        let reason = if !self.contains(field) {
            Some(FoldRejection::OutOfRange)
        } else if !self.remaining.contains(&field) {
            Some(FoldRejection::AlreadyFolded)
        } else if self.over {
            Some(FoldRejection::GameOver)
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(BoardError::InvalidFold { field, reason });
        }

        self.remaining.remove(&field);
        self.fold_sequence.push(field);
        if self.remaining.is_empty() {
            self.over = true;
        }
        Ok(())
    }

    /// Fields still open, in ascending order
    #[inline]
    #[must_use]
    pub const fn remaining_fields(&self) -> &BTreeSet<u8> {
        &self.remaining
    }

    /// Folded fields in ascending order
    #[must_use]
    pub fn folded_fields(&self) -> Vec<u8> {
        (1..=self.size)
            .filter(|field| !self.remaining.contains(field))
            .collect()
    }

    /// Folded fields in the order they were folded
    #[inline]
    #[must_use]
    pub fn fold_sequence(&self) -> &[u8] {
        &self.fold_sequence
    }

    /// End the game without touching the open fields
    pub fn forfeit(&mut self) {
        self.over = true;
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.over
    }

    /// True only for a finished game with every field folded
    #[inline]
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.over && self.remaining.is_empty()
    }

    /// Legal folds for a throw: the faces and their sum that are still open
    ///
    /// Does not change the board.
    ///
    /// # Examples
    /// ```
    /// use mermaids_bar::core::{Board, Throw};
    ///
    /// let mut board = Board::new(9).unwrap();
    /// board.fold(7).unwrap();
    ///
    /// let candidates = board.play_turn(Throw::new(3, 4).unwrap());
    /// assert_eq!(candidates.as_slice(), &[3, 4]);
    /// ```
    #[must_use]
    pub fn play_turn(&self, throw: Throw) -> Candidates {
        let mut candidates = Candidates::default();
        for value in throw.values() {
            if self.remaining.contains(&value) {
                candidates.insert(value);
            }
        }
        candidates
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            remaining: (1..=DEFAULT_BOARD_SIZE).collect(),
            fold_sequence: Vec::with_capacity(usize::from(DEFAULT_BOARD_SIZE)),
            over: false,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in 1..=self.size {
            if field > 1 {
                write!(f, " ")?;
            }
            if self.remaining.contains(&field) {
                write!(f, "{field}")?;
            } else {
                write!(f, "x")?;
            }
        }
        Ok(())
    }
}
