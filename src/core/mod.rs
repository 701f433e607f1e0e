//! Core domain types for Wordle
//!
//! Words, per-letter feedback, and the guess evaluator. Everything here is a
//! pure function of its inputs.

mod feedback;
mod guess;
mod word;

pub use feedback::Feedback;
pub use guess::{GuessResult, LengthMismatch, PLACEHOLDER};
pub use word::{Word, WordError, char_len, is_letters, validate};
