//! Dice throws and throw sources

use super::board::BoardError;
use rand::Rng;
use std::collections::VecDeque;
use std::fmt;

/// Number of faces on each die
pub const DIE_FACES: u8 = 6;

/// One throw of both dice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Throw {
    first: u8,
    second: u8,
}

impl Throw {
    /// Create a throw from two die faces
    ///
    /// # Errors
    /// Returns `BoardError::InvalidDieFace` if a face is outside 1..=6.
    ///
    /// # Examples
    /// ```
    /// use mermaids_bar::core::Throw;
    ///
    /// let throw = Throw::new(3, 4).unwrap();
    /// assert_eq!(throw.sum(), 7);
    ///
    /// assert!(Throw::new(0, 4).is_err());
    /// assert!(Throw::new(3, 7).is_err());
    /// ```
    pub fn new(first: u8, second: u8) -> Result<Self, BoardError> {
        for face in [first, second] {
            if !(1..=DIE_FACES).contains(&face) {
                return Err(BoardError::InvalidDieFace(face));
            }
        }
        Ok(Self { first, second })
    }

    /// Throw two fair dice
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            first: rng.random_range(1..=DIE_FACES),
            second: rng.random_range(1..=DIE_FACES),
        }
    }

    #[inline]
    #[must_use]
    pub const fn first(&self) -> u8 {
        self.first
    }

    #[inline]
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.second
    }

    #[inline]
    #[must_use]
    pub const fn sum(&self) -> u8 {
        self.first + self.second
    }

    /// Every number this throw can fold: both faces, then the sum
    #[inline]
    #[must_use]
    pub const fn values(&self) -> [u8; 3] {
        [self.first, self.second, self.sum()]
    }
}

impl fmt::Display for Throw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.first, self.second)
    }
}

/// A source of throws for a game
pub trait Dice {
    /// Produce the next throw, drawing from `rng` if needed
    fn throw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Throw;
}

/// Two fair six-sided dice
#[derive(Debug, Clone, Copy, Default)]
pub struct FairDice;

impl Dice for FairDice {
    fn throw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Throw {
        Throw::roll(rng)
    }
}

/// Dice that replay a fixed list of throws
///
/// Once the script runs out, throws come from fair dice.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    script: VecDeque<Throw>,
}

impl ScriptedDice {
    #[must_use]
    pub fn new(throws: impl IntoIterator<Item = Throw>) -> Self {
        Self {
            script: throws.into_iter().collect(),
        }
    }

    /// Build a script from face pairs
    ///
    /// # Errors
    /// Returns `BoardError::InvalidDieFace` for the first invalid face.
    ///
    /// # Examples
    /// ```
    /// use mermaids_bar::core::ScriptedDice;
    ///
    /// let dice = ScriptedDice::from_pairs(&[(6, 6), (3, 4)]).unwrap();
    /// assert_eq!(dice.remaining(), 2);
    ///
    /// assert!(ScriptedDice::from_pairs(&[(6, 7)]).is_err());
    /// ```
    pub fn from_pairs(pairs: &[(u8, u8)]) -> Result<Self, BoardError> {
        let script = pairs
            .iter()
            .map(|&(first, second)| Throw::new(first, second))
            .collect::<Result<VecDeque<_>, _>>()?;
        Ok(Self { script })
    }

    /// Scripted throws not yet used
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Dice for ScriptedDice {
    fn throw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Throw {
        self.script.pop_front().unwrap_or_else(|| Throw::roll(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn throw_rejects_bad_faces() {
        assert_eq!(Throw::new(0, 1), Err(BoardError::InvalidDieFace(0)));
        assert_eq!(Throw::new(1, 7), Err(BoardError::InvalidDieFace(7)));
    }

    #[test]
    fn throw_values_and_sum() {
        let throw = Throw::new(2, 6).unwrap();
        assert_eq!(throw.first(), 2);
        assert_eq!(throw.second(), 6);
        assert_eq!(throw.sum(), 8);
        assert_eq!(throw.values(), [2, 6, 8]);
        assert_eq!(throw.to_string(), "2, 6");
    }

    #[test]
    fn rolled_faces_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 7];
        for _ in 0..1_000 {
            let throw = FairDice.throw(&mut rng);
            for face in [throw.first(), throw.second()] {
                assert!((1..=6).contains(&face));
                seen[usize::from(face)] = true;
            }
        }
        assert!(seen[1..].iter().all(|&s| s), "every face shows up");
    }

    #[test]
    fn scripted_dice_replay_in_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut dice = ScriptedDice::from_pairs(&[(1, 2), (5, 5)]).unwrap();

        assert_eq!(dice.throw(&mut rng), Throw::new(1, 2).unwrap());
        assert_eq!(dice.throw(&mut rng), Throw::new(5, 5).unwrap());
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn scripted_dice_fall_back_to_fair_dice() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut dice = ScriptedDice::default();
        let throw = dice.throw(&mut rng);
        assert!((2..=12).contains(&throw.sum()));
    }
}
