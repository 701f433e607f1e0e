//! Command implementations

pub mod check;
pub mod evaluate;
pub mod pick;
pub mod stats;

pub use check::{CheckResult, check_word};
pub use evaluate::{EvaluateResult, evaluate_guess};
pub use pick::pick_answers;
pub use stats::{WordSetSummary, summarize};
