//! Play strategies
//!
//! Decision rules for choosing a fold, the registry that names them, and the
//! game loop that applies one to a board.

mod engine;
pub mod probability;
pub mod registry;
pub mod rules;

pub use engine::{Player, Turn};
pub use probability::ProbabilityTable;
pub use registry::{DEFAULT_STRATEGY, STRATEGIES, Strategy, UnknownStrategy, lookup, names};
