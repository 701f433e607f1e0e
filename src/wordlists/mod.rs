//! Bundled word lists
//!
//! A default list compiled into the binary so a word set can be filled
//! without any file on disk.

mod embedded;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};

use crate::wordset::WordSet;

/// Length of every word in [`DEFAULT_WORDS`]
pub const DEFAULT_LENGTH: usize = 5;

/// A word set holding the bundled default list
///
/// # Examples
/// ```
/// use wordle_rules::wordlists::{DEFAULT_WORDS_COUNT, default_word_set};
///
/// let words = default_word_set();
/// assert_eq!(words.len(), DEFAULT_WORDS_COUNT);
/// assert!(words.contains("CRANE"));
/// ```
#[must_use]
pub fn default_word_set() -> WordSet {
    let mut words = WordSet::new(DEFAULT_LENGTH);
    words.load_str(&DEFAULT_WORDS.join("\n"));
    words
}
