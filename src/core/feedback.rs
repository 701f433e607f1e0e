//! Per-letter feedback tags

use std::fmt;

/// Classification of one guessed letter against the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Right letter, right position (green)
    Correct,
    /// Letter occurs elsewhere in the answer (yellow)
    Misplaced,
    /// No unmatched occurrence left in the answer (gray)
    Absent,
}

impl Feedback {
    /// Single-character marker: `G`, `Y` or `-`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Misplaced => 'Y',
            Self::Absent => '-',
        }
    }

    /// Emoji tile: 🟩, 🟨 or ⬜
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_symbols() {
        assert_eq!(Feedback::Correct.symbol(), 'G');
        assert_eq!(Feedback::Misplaced.symbol(), 'Y');
        assert_eq!(Feedback::Absent.symbol(), '-');
        assert_eq!(Feedback::Misplaced.to_string(), "Y");
    }

    #[test]
    fn feedback_emoji() {
        assert_eq!(Feedback::Correct.emoji(), '🟩');
        assert_eq!(Feedback::Misplaced.emoji(), '🟨');
        assert_eq!(Feedback::Absent.emoji(), '⬜');
    }
}
