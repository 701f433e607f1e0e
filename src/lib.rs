//! Wordle Rules
//!
//! The rules engine of a Wordle-style game: length-constrained word sets and
//! duplicate-aware guess evaluation.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_rules::core::GuessResult;
//! use wordle_rules::wordset::WordSet;
//!
//! let words = WordSet::from_words(5, ["crane", "slate", "speed"]).unwrap();
//! let answer = words.pick_random(&mut StdRng::seed_from_u64(1)).unwrap();
//!
//! let result = GuessResult::evaluate("CRANE", answer).unwrap();
//! println!("{} {}", result.correct_pattern(), result.to_emoji());
//! ```

// Core domain types
pub mod core;

// Word collections
pub mod wordset;

// Bundled word lists
pub mod wordlists;

// A round of play
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
