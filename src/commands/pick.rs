//! Random answer command

use crate::wordset::{WordSet, WordSetError};
use rand::Rng;

/// Pick `count` answers, each drawn independently and uniformly
///
/// # Errors
///
/// Returns `WordSetError::Empty` if the set has no words.
pub fn pick_answers<R: Rng + ?Sized>(
    words: &WordSet,
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>, WordSetError> {
    (0..count)
        .map(|_| words.pick_random(&mut *rng).map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn pick_answers_from_set() {
        let words = WordSet::from_words(5, ["crane", "slate", "speed"]).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        let picks = pick_answers(&words, 10, &mut rng).unwrap();
        assert_eq!(picks.len(), 10);
        assert!(picks.iter().all(|w| words.contains(w)));
    }

    #[test]
    fn pick_answers_empty_set() {
        let words = WordSet::new(5);
        let mut rng = StdRng::seed_from_u64(11);

        assert!(matches!(
            pick_answers(&words, 1, &mut rng),
            Err(WordSetError::Empty)
        ));
    }

    #[test]
    fn pick_zero_answers_from_empty_set() {
        let words = WordSet::new(5);
        let mut rng = StdRng::seed_from_u64(11);

        assert!(pick_answers(&words, 0, &mut rng).unwrap().is_empty());
    }
}
