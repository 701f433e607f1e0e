//! Word set summary command
//!
//! Counts how many words contain each letter.

use crate::wordset::WordSet;
use rustc_hash::FxHashMap;

/// Summary of a loaded word set
pub struct WordSetSummary {
    pub length: usize,
    pub total_words: usize,
    /// Letters by the number of words containing them, most common first
    pub letter_frequency: Vec<(char, usize)>,
}

/// Summarize the contents of `words`
#[must_use]
pub fn summarize(words: &WordSet) -> WordSetSummary {
    let mut frequency: FxHashMap<char, usize> = FxHashMap::default();
    for word in words.iter() {
        let mut seen: Vec<char> = word.chars().collect();
        seen.sort_unstable();
        seen.dedup();
        for letter in seen {
            *frequency.entry(letter).or_insert(0) += 1;
        }
    }

    let mut letter_frequency: Vec<(char, usize)> = frequency.into_iter().collect();
    letter_frequency.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    WordSetSummary {
        length: words.length(),
        total_words: words.len(),
        letter_frequency,
    }
}
