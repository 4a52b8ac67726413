//! Single-throw probabilities
//!
//! For each number, how likely one throw of two dice lets you fold it.

use crate::core::DIE_FACES;
use std::sync::LazyLock;

/// Number of ordered outcomes when throwing two dice
pub const OUTCOMES: u32 = (DIE_FACES as u32) * (DIE_FACES as u32);

/// Largest number a throw can produce
const MAX_RESULT: u8 = DIE_FACES * 2;

/// Counts of throws that can fold each number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbabilityTable {
    /// `ways[n]` is the number of the 36 outcomes allowing a fold of `n`
    ways: [u32; MAX_RESULT as usize + 1],
}

static TABLE: LazyLock<ProbabilityTable> = LazyLock::new(ProbabilityTable::compute);

impl ProbabilityTable {
    /// Enumerate every ordered pair of faces and count, per number, the
    /// throws where it equals either face or the sum
    #[must_use]
    pub fn compute() -> Self {
        let mut ways = [0; MAX_RESULT as usize + 1];
        for result in 1..=MAX_RESULT {
            let mut count = 0;
            for first in 1..=DIE_FACES {
                for second in 1..=DIE_FACES {
                    if first == result || second == result || first + second == result {
                        count += 1;
                    }
                }
            }
            ways[usize::from(result)] = count;
        }
        Self { ways }
    }

    /// Process-wide table, computed on first use
    #[must_use]
    pub fn global() -> &'static Self {
        &TABLE
    }

    /// Outcomes (out of 36) that let a throw fold `number`
    #[must_use]
    pub fn ways(&self, number: u8) -> u32 {
        self.ways.get(usize::from(number)).copied().unwrap_or(0)
    }

    /// Probability that a single throw lets you fold `number`
    ///
    /// # Examples
    /// ```
    /// use mermaids_bar::strategy::ProbabilityTable;
    ///
    /// let table = ProbabilityTable::global();
    /// assert_eq!(table.probability(7), 6.0 / 36.0);
    /// assert_eq!(table.probability(13), 0.0);
    /// ```
    #[must_use]
    pub fn probability(&self, number: u8) -> f64 {
        f64::from(self.ways(number)) / f64::from(OUTCOMES)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn exact_counts_for_every_number() {
        let table = ProbabilityTable::compute();
        let expected = [11, 12, 13, 14, 15, 16, 6, 5, 4, 3, 2, 1];
        for (number, &ways) in (1..=12).zip(expected.iter()) {
            assert_eq!(table.ways(number), ways, "ways for {number}");
        }
    }

    #[test]
    fn exact_fractions() {
        let table = ProbabilityTable::global();
        assert_eq!(table.probability(1), 11.0 / 36.0);
        assert_eq!(table.probability(6), 16.0 / 36.0);
        assert_eq!(table.probability(7), 6.0 / 36.0);
        assert_eq!(table.probability(8), 5.0 / 36.0);
        assert_eq!(table.probability(9), 4.0 / 36.0);
    }

    #[test]
    fn numbers_off_the_dice_are_impossible() {
        let table = ProbabilityTable::global();
        assert_eq!(table.ways(0), 0);
        assert_eq!(table.probability(0), 0.0);
        assert_eq!(table.probability(13), 0.0);
        assert_eq!(table.probability(u8::MAX), 0.0);
    }

    #[test]
    fn face_numbers_beat_sum_only_numbers() {
        let table = ProbabilityTable::global();
        for face in 1..=6 {
            for sum_only in 7..=12 {
                assert!(table.probability(face) > table.probability(sum_only));
            }
        }
    }

    #[test]
    fn no_two_numbers_share_a_probability() {
        let table = ProbabilityTable::global();
        let mut ways: Vec<u32> = (1..=12).map(|n| table.ways(n)).collect();
        ways.sort_unstable();
        ways.dedup();
        assert_eq!(ways.len(), 12);
    }

    #[test]
    fn global_matches_fresh_computation() {
        assert_eq!(ProbabilityTable::global(), &ProbabilityTable::compute());
    }
}
