//! Game loop
//!
//! Plays one board to the end with a given strategy.

use super::registry::Strategy;
use crate::core::{Board, BoardError, Candidates, Dice, Throw};
use rand::RngCore;

/// One turn of a played game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub throw: Throw,
    pub candidates: Candidates,
    /// The folded field, `None` when the throw forced a forfeit
    pub folded: Option<u8>,
}

/// Plays games with a fixed strategy
#[derive(Debug, Clone, Copy)]
pub struct Player<'a> {
    strategy: &'a Strategy,
}

impl<'a> Player<'a> {
    #[must_use]
    pub const fn new(strategy: &'a Strategy) -> Self {
        Self { strategy }
    }

    #[must_use]
    pub const fn strategy(&self) -> &'a Strategy {
        self.strategy
    }

    /// Throw and fold until the board is won or no fold is possible
    ///
    /// Returns every turn in order; the last turn either folds the final
    /// field or has `folded == None`.
    ///
    /// # Errors
    /// Returns a `BoardError` only if the strategy picks a field that cannot
    /// be folded.
    ///
    /// # Examples
    /// ```
    /// use mermaids_bar::core::{Board, ScriptedDice};
    /// use mermaids_bar::strategy::{Player, lookup};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let player = Player::new(lookup("max_die").unwrap());
    /// let mut board = Board::new(9).unwrap();
    /// let mut dice = ScriptedDice::from_pairs(&[(6, 6), (3, 3), (3, 3)]).unwrap();
    /// let mut rng = StdRng::seed_from_u64(0);
    ///
    /// let turns = player.play(&mut board, &mut dice, &mut rng).unwrap();
    /// assert_eq!(turns.len(), 3);
    /// assert_eq!(board.fold_sequence(), &[6, 3]);
    /// assert!(board.is_over() && !board.has_won());
    /// ```
    pub fn play<D, R>(
        &self,
        board: &mut Board,
        dice: &mut D,
        rng: &mut R,
    ) -> Result<Vec<Turn>, BoardError>
    where
        D: Dice,
        R: RngCore,
    {
        let mut turns = Vec::with_capacity(usize::from(board.size()) + 1);

        while !board.is_over() {
            let throw = dice.throw(rng);
            let candidates = board.play_turn(throw);
            let folded = self.strategy.choose(&candidates, rng);

            match folded {
                Some(field) => {
                    debug_assert!(
                        candidates.contains(field),
                        "{} chose {field} outside {candidates:?}",
                        self.strategy.name
                    );
                    board.fold(field)?;
                    tracing::trace!(%throw, field, "folded");
                }
                None => {
                    board.forfeit();
                    tracing::trace!(%throw, left = board.remaining_fields().len(), "forfeit");
                }
            }

            turns.push(Turn {
                throw,
                candidates,
                folded,
            });
        }

        Ok(turns)
    }
}
