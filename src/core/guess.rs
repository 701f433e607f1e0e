//! Guess evaluation against a hidden answer
//!
//! Each guessed letter is classified as Correct, Misplaced or Absent using
//! Wordle's duplicate-letter rules: a letter is only credited as many times as
//! it occurs in the answer, and exact matches claim their occurrences first.

use super::Feedback;
use super::word::{WordError, letter_counts};
use std::fmt;

/// Placeholder used in [`GuessResult::correct_pattern`] for non-correct positions
pub const PLACEHOLDER: char = '_';

/// Guess and answer have different lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMismatch {
    pub guess: usize,
    pub answer: usize,
}

impl fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Guess has {} letters but the answer has {}",
            self.guess, self.answer
        )
    }
}

impl std::error::Error for LengthMismatch {}

impl From<LengthMismatch> for WordError {
    fn from(err: LengthMismatch) -> Self {
        if err.guess < err.answer {
            Self::TooShort {
                len: err.guess,
                expected: err.answer,
            }
        } else {
            Self::TooLong {
                len: err.guess,
                expected: err.answer,
            }
        }
    }
}

/// Feedback for a single guess
///
/// Derived and read-only: one tag per guessed letter plus the aggregates a
/// player sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    guess: String,
    letters: Vec<char>,
    feedback: Vec<Feedback>,
    is_win: bool,
}

impl GuessResult {
    /// Evaluate `guess` against `answer`
    ///
    /// Letters are compared exactly; callers normalize case beforehand.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct and remove them from the
    ///    answer's letter pool
    /// 2. Second pass: mark remaining letters Misplaced while the pool still
    ///    holds that letter, otherwise Absent
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the two words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_rules::core::GuessResult;
    ///
    /// let result = GuessResult::evaluate("ERASE", "SPEED").unwrap();
    /// assert_eq!(result.correct_pattern(), "_____");
    /// assert_eq!(result.misplaced_letters(), "ESE");
    /// assert_eq!(result.absent_letters(), "AR");
    /// assert!(!result.is_win());
    /// ```
    pub fn evaluate(guess: &str, answer: &str) -> Result<Self, LengthMismatch> {
        let letters: Vec<char> = guess.chars().collect();
        let answer_letters: Vec<char> = answer.chars().collect();

        if letters.len() != answer_letters.len() {
            return Err(LengthMismatch {
                guess: letters.len(),
                answer: answer_letters.len(),
            });
        }

        let feedback = classify(&letters, &answer_letters);

        Ok(Self {
            guess: guess.to_string(),
            letters,
            feedback,
            is_win: guess == answer,
        })
    }

    /// The guess this result was computed for
    #[inline]
    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    /// Per-position feedback tags
    #[inline]
    #[must_use]
    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    /// True iff the guess equals the answer
    #[inline]
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.is_win
    }

    /// The guess with every non-correct letter replaced by `_`
    #[must_use]
    pub fn correct_pattern(&self) -> String {
        self.letters
            .iter()
            .zip(&self.feedback)
            .map(|(&ch, &fb)| {
                if fb == Feedback::Correct {
                    ch
                } else {
                    PLACEHOLDER
                }
            })
            .collect()
    }

    /// Misplaced letters in guess order, one per misplaced position
    #[must_use]
    pub fn misplaced_letters(&self) -> String {
        self.letters_tagged(Feedback::Misplaced).collect()
    }

    /// Absent letters sorted lexicographically, one per absent position
    #[must_use]
    pub fn absent_letters(&self) -> String {
        let mut absent: Vec<char> = self.letters_tagged(Feedback::Absent).collect();
        absent.sort_unstable();
        absent.into_iter().collect()
    }

    /// Number of positions carrying `tag`
    #[must_use]
    pub fn count(&self, tag: Feedback) -> usize {
        self.feedback.iter().filter(|&&fb| fb == tag).count()
    }

    /// Feedback as a string of `G`, `Y` and `-` markers
    #[must_use]
    pub fn symbols(&self) -> String {
        self.feedback.iter().map(|fb| fb.symbol()).collect()
    }

    /// Feedback as an emoji row like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.feedback.iter().map(|fb| fb.emoji()).collect()
    }

    fn letters_tagged(&self, tag: Feedback) -> impl Iterator<Item = char> + '_ {
        self.letters
            .iter()
            .zip(&self.feedback)
            .filter(move |&(_, &fb)| fb == tag)
            .map(|(&ch, _)| ch)
    }
}

/// Two-pass classification over equal-length letter slices
fn classify(guess: &[char], answer: &[char]) -> Vec<Feedback> {
    let mut result = vec![Feedback::Absent; guess.len()];
    let mut answer_available = letter_counts(answer);

    // First pass: exact position matches
    for (i, (g, a)) in guess.iter().zip(answer).enumerate() {
        if g == a {
            result[i] = Feedback::Correct;
            if let Some(count) = answer_available.get_mut(g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong position, but an unclaimed occurrence remains
    for (g, fb) in guess.iter().zip(result.iter_mut()) {
        if *fb == Feedback::Correct {
            continue;
        }
        if let Some(count) = answer_available.get_mut(g)
            && *count > 0
        {
            *fb = Feedback::Misplaced;
            *count -= 1;
        }
    }

    result
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess, self.symbols())
    }
}
