//! End-to-end checks of the public API: load a list, pick an answer, play it

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use wordle_rules::core::{Feedback, GuessResult, WordError};
use wordle_rules::game::Game;
use wordle_rules::wordset::{WordSet, WordSetError};

#[test]
fn added_words_are_found_uppercased() {
    let mut words = WordSet::new(5);
    for w in ["crane", "Slate", "SPEED", "blImp"] {
        words.add(w).unwrap();
        assert!(words.contains(&w.to_uppercase()));
    }
    assert_eq!(words.len(), 4);
}

#[test]
fn add_reports_each_failure_distinctly() {
    let mut words = WordSet::new(5);

    assert!(matches!(words.add("abc"), Err(WordError::TooShort { .. })));
    assert!(matches!(words.add("abcdefg"), Err(WordError::TooLong { .. })));
    assert!(matches!(words.add("ab#de"), Err(WordError::NotLetters)));
    assert!(words.is_empty());
}

#[test]
fn word_always_wins_against_itself() {
    for word in ["CRANE", "SPEED", "AAAAA", "LLAMA"] {
        let result = GuessResult::evaluate(word, word).unwrap();
        assert!(result.is_win());
        assert_eq!(result.correct_pattern(), word);
        assert_eq!(result.count(Feedback::Correct), word.len());
    }
}

#[test]
fn load_mixed_lengths_then_play_a_round() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "crane\nat\nslate   \nmagnificent\nSPEED").unwrap();

    let mut words = WordSet::new(5);
    assert_eq!(words.load_file(file.path()), 3);

    let mut rng = StdRng::seed_from_u64(2024);
    let mut game = Game::new(&words, &mut rng).unwrap();
    let answer = game.answer().to_string();

    let mut guesses: Vec<&str> = words.iter().collect();
    guesses.sort_unstable();
    for guess in guesses {
        let result = game.guess(guess).unwrap();
        if result.is_win() {
            break;
        }
        assert_ne!(guess, answer);
    }

    assert!(game.is_won());
    assert!(game.guesses() <= 3);
}

#[test]
fn missing_source_is_a_quiet_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let mut words = WordSet::from_words(5, ["crane"]).unwrap();

    assert_eq!(words.load_file(&missing), 0);
    assert_eq!(words.len(), 1);
    assert!(matches!(
        words.try_load_file(&missing),
        Err(WordSetError::SourceUnavailable { .. })
    ));
    assert_eq!(words.len(), 1);
}

#[test]
fn seven_letter_rounds() {
    let words = WordSet::from_words(7, ["planets", "example"]).unwrap();
    let result = GuessResult::evaluate("PLANETS", "EXAMPLE").unwrap();

    assert!(words.check_word("planet").is_err());
    assert_eq!(result.correct_pattern(), "__A____");
    assert_eq!(result.misplaced_letters(), "PLE");
    assert_eq!(result.absent_letters(), "NST");
}
