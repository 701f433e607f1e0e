//! A single round of play
//!
//! Picks an answer from a word set, validates and counts guesses, and
//! evaluates each one. There is no turn limit; callers decide when to stop.

use crate::core::{GuessResult, Word, WordError, char_len};
use crate::wordset::{WordSet, WordSetError};
use rand::Rng;
use tracing::debug;

/// One round against a fixed answer
#[derive(Debug, Clone)]
pub struct Game {
    answer: String,
    length: usize,
    guesses: usize,
    won: bool,
}

impl Game {
    /// Start a round with an answer drawn uniformly from `words`
    ///
    /// # Errors
    /// Returns `WordSetError::Empty` if `words` holds nothing to pick.
    pub fn new<R: Rng + ?Sized>(words: &WordSet, rng: &mut R) -> Result<Self, WordSetError> {
        let answer = words.pick_random(rng)?;
        debug!(length = words.length(), "picked answer");
        Ok(Self::with_answer(answer))
    }

    /// Start a round with a known answer, uppercased
    #[must_use]
    pub fn with_answer(answer: &str) -> Self {
        let answer = answer.to_uppercase();
        Self {
            length: char_len(&answer),
            answer,
            guesses: 0,
            won: false,
        }
    }

    /// Validate, normalize and evaluate a guess
    ///
    /// Only guesses that pass validation are counted.
    ///
    /// # Errors
    /// Returns `WordError` if the guess is too short, too long, or not all
    /// letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_rules::game::Game;
    ///
    /// let mut game = Game::with_answer("crane");
    /// let result = game.guess("slate").unwrap();
    /// assert_eq!(result.correct_pattern(), "__A_E");
    /// assert_eq!(game.guesses(), 1);
    /// ```
    pub fn guess(&mut self, word: &str) -> Result<GuessResult, WordError> {
        let guess = Word::new(word, self.length)?;

        let result = GuessResult::evaluate(guess.text(), &self.answer)?;
        self.guesses += 1;
        if result.is_win() {
            self.won = true;
        }

        debug!(
            guess = result.guess(),
            turn = self.guesses,
            win = result.is_win(),
            "evaluated guess"
        );
        Ok(result)
    }

    /// The hidden answer
    #[inline]
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Letters per word this round
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Number of valid guesses made so far
    #[inline]
    #[must_use]
    pub const fn guesses(&self) -> usize {
        self.guesses
    }

    /// True once a guess has matched the answer
    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }
}
