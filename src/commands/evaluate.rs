//! Guess evaluation command
//!
//! Scores one guess against a given answer, the way a round would.

use crate::core::{GuessResult, WordError};
use crate::game::Game;
use crate::wordset::WordSet;

/// Result of evaluating a guess
pub struct EvaluateResult {
    pub result: GuessResult,
    pub answer: String,
    pub guess_known: bool,
    pub answer_known: bool,
}

/// Evaluate `guess` against `answer`, both checked against the set's length
///
/// Neither word has to be in the set; membership is reported alongside.
///
/// # Errors
///
/// Returns the `WordError` of whichever word fails validation first, answer
/// before guess.
pub fn evaluate_guess(
    words: &WordSet,
    guess: &str,
    answer: &str,
) -> Result<EvaluateResult, WordError> {
    words.check_word(answer)?;

    let mut game = Game::with_answer(answer);
    let result = game.guess(guess)?;

    Ok(EvaluateResult {
        guess_known: words.contains(result.guess()),
        answer_known: words.contains(game.answer()),
        answer: game.answer().to_string(),
        result,
    })
}
