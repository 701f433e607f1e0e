//! Wordle word representation
//!
//! A Word stores an uppercase, alphabetic word of a fixed length, validated
//! in its uppercase form.

use rustc_hash::FxHashMap;
use std::fmt;

/// A validated, uppercase word of a known length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for words that cannot be used in a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    TooShort { len: usize, expected: usize },
    TooLong { len: usize, expected: usize },
    NotLetters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { len, expected } => {
                write!(f, "Word is too short: expected {expected} letters, got {len}")
            }
            Self::TooLong { len, expected } => {
                write!(f, "Word is too long: expected {expected} letters, got {len}")
            }
            Self::NotLetters => write!(f, "Word contains non-letter characters"),
        }
    }
}

impl std::error::Error for WordError {}

/// Number of characters in `word`, which is what word lengths are measured in
#[inline]
#[must_use]
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Check that `word` could be a member of a set of `length`-letter words
///
/// Checks run in order: too short, too long, then non-letter content. The
/// length is measured on the uppercase form, the one a set stores, so `ß`
/// counts as the two letters of `SS`.
///
/// # Errors
/// Returns the first `WordError` the word trips.
///
/// # Examples
/// ```
/// use wordle_rules::core::{validate, WordError};
///
/// assert!(validate("crane", 5).is_ok());
/// assert!(matches!(validate("cr4ne", 5), Err(WordError::NotLetters)));
/// assert!(matches!(validate("cr4", 5), Err(WordError::TooShort { .. })));
/// ```
pub fn validate(word: &str, length: usize) -> Result<(), WordError> {
    let len = char_len(&word.to_uppercase());

    if len < length {
        return Err(WordError::TooShort {
            len,
            expected: length,
        });
    }

    if len > length {
        return Err(WordError::TooLong {
            len,
            expected: length,
        });
    }

    if !is_letters(word) {
        return Err(WordError::NotLetters);
    }

    Ok(())
}

/// True when `word` is non-empty and every character is alphabetic
///
/// Uses the Unicode `Alphabetic` property, which is wider than "letter"
/// categories alone: letter numbers such as `Ⅷ` and some combining marks pass.
#[inline]
#[must_use]
pub fn is_letters(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

/// Count how many times each letter occurs
///
/// Used as the answer's remaining-letter pool during evaluation.
#[must_use]
pub fn letter_counts(letters: &[char]) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for &ch in letters {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

impl Word {
    /// Create a new Word of exactly `length` letters
    ///
    /// The text is normalized to uppercase first and validated in that form.
    ///
    /// # Errors
    /// Returns `WordError` if the word is too short, too long, or contains
    /// non-letter characters (checked in that order).
    ///
    /// # Examples
    /// ```
    /// use wordle_rules::core::Word;
    ///
    /// let word = Word::new("crane", 5).unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long", 5).is_err());
    /// assert!(Word::new("sh0rt", 5).is_err());
    /// ```
    pub fn new(text: &str, length: usize) -> Result<Self, WordError> {
        let text = text.to_uppercase();
        validate(&text, length)?;

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
