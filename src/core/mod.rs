//! Core domain types for the dice-folding game
//!
//! Board state, throws and candidate sets. Nothing here knows about strategies.

mod board;
mod candidates;
mod dice;

pub use board::{Board, BoardError, DEFAULT_BOARD_SIZE, FoldRejection, MAX_BOARD_SIZE};
pub use candidates::Candidates;
pub use dice::{DIE_FACES, Dice, FairDice, ScriptedDice, Throw};
