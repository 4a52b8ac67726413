//! Decision rules
//!
//! Each rule picks one field from the candidates of a throw, or `None` when
//! there is nothing to fold.

use super::probability::ProbabilityTable;
use crate::core::Candidates;
use rand::RngCore;
use rand::prelude::IndexedRandom;

/// Fold the candidate the dice are least likely to offer again
///
/// Ties go to the lowest number.
pub fn min_probability(candidates: &Candidates, _rng: &mut dyn RngCore) -> Option<u8> {
    let table = ProbabilityTable::global();
    // min_by_key keeps the first minimum; candidates ascend
    candidates.iter().min_by_key(|&field| table.ways(field))
}

/// Fold the smallest candidate
pub fn min_value(candidates: &Candidates, _rng: &mut dyn RngCore) -> Option<u8> {
    candidates.min()
}

/// Fold the largest candidate
pub fn max_value(candidates: &Candidates, _rng: &mut dyn RngCore) -> Option<u8> {
    candidates.max()
}

/// Fold a uniformly random candidate
pub fn random_choice(candidates: &Candidates, rng: &mut dyn RngCore) -> Option<u8> {
    candidates.as_slice().choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn every_rule_returns_none_without_candidates() {
        let empty = Candidates::default();
        let mut rng = rng();
        assert_eq!(min_probability(&empty, &mut rng), None);
        assert_eq!(min_value(&empty, &mut rng), None);
        assert_eq!(max_value(&empty, &mut rng), None);
        assert_eq!(random_choice(&empty, &mut rng), None);
    }

    #[test]
    fn min_probability_prefers_sum_only_numbers() {
        let mut rng = rng();
        // 7 has 6 ways, 3 has 13, 4 has 14
        let candidates = Candidates::from_fields(&[3, 4, 7]);
        assert_eq!(min_probability(&candidates, &mut rng), Some(7));

        // 9 has 4 ways, 8 has 5
        let candidates = Candidates::from_fields(&[4, 5, 9]);
        assert_eq!(min_probability(&candidates, &mut rng), Some(9));
    }

    #[test]
    fn min_probability_among_faces() {
        let mut rng = rng();
        // 1 has 11 ways, 6 has 16
        let candidates = Candidates::from_fields(&[6, 1]);
        assert_eq!(min_probability(&candidates, &mut rng), Some(1));
    }

    #[test]
    fn min_and_max_value() {
        let mut rng = rng();
        let candidates = Candidates::from_fields(&[2, 5, 7]);
        assert_eq!(min_value(&candidates, &mut rng), Some(2));
        assert_eq!(max_value(&candidates, &mut rng), Some(7));
    }

    #[test]
    fn single_candidate_is_always_chosen() {
        let mut rng = rng();
        let candidates = Candidates::from_fields(&[6]);
        assert_eq!(min_probability(&candidates, &mut rng), Some(6));
        assert_eq!(min_value(&candidates, &mut rng), Some(6));
        assert_eq!(max_value(&candidates, &mut rng), Some(6));
        assert_eq!(random_choice(&candidates, &mut rng), Some(6));
    }

    #[test]
    fn random_choice_covers_all_candidates() {
        let mut rng = rng();
        let candidates = Candidates::from_fields(&[1, 4, 5]);
        let mut seen = [0_usize; 6];

        for _ in 0..600 {
            let choice = random_choice(&candidates, &mut rng).unwrap();
            assert!(candidates.contains(choice));
            seen[usize::from(choice)] += 1;
        }

        for field in candidates.iter() {
            assert!(seen[usize::from(field)] > 100, "{field} picked too rarely");
        }
    }
}
