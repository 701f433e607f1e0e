//! Word check command
//!
//! Reports whether a word could be played and whether the set knows it.

use crate::core::WordError;
use crate::wordset::WordSet;

/// Result of checking a word
pub struct CheckResult {
    pub word: String,
    pub length: usize,
    pub validity: Result<(), WordError>,
    pub known: bool,
}

impl CheckResult {
    /// True when the word passes validation and is in the set
    #[must_use]
    pub const fn is_playable(&self) -> bool {
        self.validity.is_ok() && self.known
    }
}

/// Check `word` against the set's rules and contents
///
/// Membership is looked up in uppercase, the form the set stores.
#[must_use]
pub fn check_word(words: &WordSet, word: &str) -> CheckResult {
    let validity = words.check_word(word);
    let word = word.to_uppercase();

    CheckResult {
        known: words.contains(&word),
        length: words.length(),
        validity,
        word,
    }
}
