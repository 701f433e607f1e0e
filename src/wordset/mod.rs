//! Length-constrained word collections
//!
//! A [`WordSet`] holds unique uppercase words that all share one length. It
//! validates words on the way in, answers membership queries, and picks
//! answers at random from a caller-supplied random source.

pub mod loader;

use crate::core::{WordError, char_len, is_letters, validate};
use rand::Rng;
use rand::seq::IteratorRandom;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Errors from word set operations other than word validation
#[derive(Debug)]
pub enum WordSetError {
    /// No words to pick from
    Empty,
    /// A word source could not be opened or read
    SourceUnavailable { path: PathBuf, source: io::Error },
}

impl fmt::Display for WordSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word set is empty"),
            Self::SourceUnavailable { path, source } => {
                write!(f, "Word source {} unavailable: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for WordSetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::SourceUnavailable { source, .. } => Some(source),
        }
    }
}

/// A set of unique, uppercase words of one fixed length
///
/// Membership tests are case-sensitive against the stored uppercase form:
/// `add` normalizes, `contains` and `remove` do not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSet {
    length: usize,
    words: FxHashSet<String>,
}

impl WordSet {
    /// Create an empty set of `length`-letter words
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            length,
            words: FxHashSet::default(),
        }
    }

    /// Create a set from a list of words, validating each one
    ///
    /// # Errors
    /// Returns the error of the first word `add` rejects.
    pub fn from_words<I, S>(length: usize, words: I) -> Result<Self, WordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new(length);
        set.add_all(words)?;
        Ok(set)
    }

    /// Word length every member shares
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Add a word, stored uppercased
    ///
    /// The length is checked on the uppercase form, so every member has
    /// exactly `length()` characters. Adding a word already present is a no-op.
    ///
    /// # Errors
    /// Checks run in order: `NotLetters` if any character is not a letter,
    /// then `TooShort`, then `TooLong`. Nothing is stored on failure.
    ///
    /// # Examples
    /// ```
    /// use wordle_rules::core::WordError;
    /// use wordle_rules::wordset::WordSet;
    ///
    /// let mut words = WordSet::new(5);
    /// words.add("crane").unwrap();
    /// assert!(words.contains("CRANE"));
    /// assert_eq!(words.add("cr4ne"), Err(WordError::NotLetters));
    /// ```
    pub fn add(&mut self, word: &str) -> Result<(), WordError> {
        if !is_letters(word) {
            return Err(WordError::NotLetters);
        }

        let word = word.to_uppercase();
        let len = char_len(&word);
        if len < self.length {
            return Err(WordError::TooShort {
                len,
                expected: self.length,
            });
        }
        if len > self.length {
            return Err(WordError::TooLong {
                len,
                expected: self.length,
            });
        }

        self.words.insert(word);
        Ok(())
    }

    /// Add several words, stopping at the first invalid one
    ///
    /// # Errors
    /// Returns the error of the first word `add` rejects. Words before it
    /// stay added.
    pub fn add_all<I, S>(&mut self, words: I) -> Result<(), WordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add(word.as_ref())?;
        }
        Ok(())
    }

    /// Exact, case-sensitive membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Remove a word if present; returns whether it was
    pub fn remove(&mut self, word: &str) -> bool {
        self.words.remove(word)
    }

    /// Load words from a newline-delimited file
    ///
    /// Lines are trimmed and uppercased; those of the set's length go straight
    /// into the set without the letter check `add` performs, the rest are
    /// skipped. If the file cannot be read a warning is logged and the set is
    /// left unchanged. A single unreadable line, such as one that is not valid
    /// UTF-8, discards the whole source.
    ///
    /// Returns the number of words newly added.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> usize {
        match self.try_load_file(path) {
            Ok(added) => added,
            Err(err) => {
                warn!("{err}; word set left unchanged");
                0
            }
        }
    }

    /// Load words from a file, reporting an unreadable source to the caller
    ///
    /// Loading is all-or-nothing: no word is added unless the whole file was
    /// read.
    ///
    /// # Errors
    /// Returns `WordSetError::SourceUnavailable` if the file cannot be opened
    /// or read.
    pub fn try_load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, WordSetError> {
        let path = path.as_ref();
        let words = loader::read_words(path, self.length).map_err(|source| {
            WordSetError::SourceUnavailable {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let added = self.insert_unchecked(words);
        debug!(path = %path.display(), added, total = self.len(), "loaded word source");
        Ok(added)
    }

    /// Load words from newline-delimited text, with the same rules as
    /// [`WordSet::load_file`]
    pub fn load_str(&mut self, text: &str) -> usize {
        let added = self.insert_unchecked(loader::words_from_str(text, self.length));
        debug!(added, total = self.len(), "loaded in-memory word source");
        added
    }

    fn insert_unchecked(&mut self, words: Vec<String>) -> usize {
        let before = self.words.len();
        self.words.extend(words);
        self.words.len() - before
    }

    /// Validate a word against this set's length without storing it
    ///
    /// Checks run in order: `TooShort`, `TooLong`, then `NotLetters`.
    ///
    /// # Errors
    /// Returns the first `WordError` the word trips.
    pub fn check_word(&self, word: &str) -> Result<(), WordError> {
        validate(word, self.length)
    }

    /// Number of stored words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick one word uniformly at random
    ///
    /// # Errors
    /// Returns `WordSetError::Empty` if the set holds no words.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_rules::wordset::WordSet;
    ///
    /// let words = WordSet::from_words(5, ["crane", "slate"]).unwrap();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let answer = words.pick_random(&mut rng).unwrap();
    /// assert!(words.contains(answer));
    /// ```
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str, WordSetError> {
        self.words
            .iter()
            .choose(rng)
            .map(String::as_str)
            .ok_or(WordSetError::Empty)
    }

    /// Independent copy of the stored words
    #[must_use]
    pub fn snapshot(&self) -> FxHashSet<String> {
        self.words.clone()
    }

    /// Iterate over the stored words in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl fmt::Display for WordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WordSet of {} words of length {}",
            self.words.len(),
            self.length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    fn five() -> WordSet {
        WordSet::from_words(5, ["crane", "slate", "speed"]).unwrap()
    }

    #[test]
    fn add_stores_uppercase() {
        let mut words = WordSet::new(5);
        words.add("crane").unwrap();

        assert!(words.contains("CRANE"));
        assert!(!words.contains("crane"));
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn add_is_idempotent() {
        let mut words = WordSet::new(5);
        words.add("crane").unwrap();
        words.add("CRANE").unwrap();
        words.add("Crane").unwrap();

        assert_eq!(words.len(), 1);
    }

    #[test]
    fn add_rejects_invalid_words() {
        let mut words = WordSet::new(5);

        assert_eq!(
            words.add("cran"),
            Err(WordError::TooShort {
                len: 4,
                expected: 5
            })
        );
        assert_eq!(
            words.add("cranes"),
            Err(WordError::TooLong {
                len: 6,
                expected: 5
            })
        );
        assert_eq!(words.add("cr4ne"), Err(WordError::NotLetters));
        assert!(words.is_empty());
    }

    #[test]
    fn add_checks_letters_before_length() {
        let mut words = WordSet::new(5);

        assert_eq!(words.add("ab1"), Err(WordError::NotLetters));
        assert_eq!(words.add("abcdef!"), Err(WordError::NotLetters));
        assert_eq!(words.add(""), Err(WordError::NotLetters));
    }

    #[test]
    fn add_measures_length_after_uppercasing() {
        // ß uppercases to SS
        let mut six = WordSet::new(6);
        assert_eq!(
            six.add("straße"),
            Err(WordError::TooLong {
                len: 7,
                expected: 6
            })
        );
        assert!(six.is_empty());

        let mut seven = WordSet::new(7);
        seven.add("straße").unwrap();
        assert!(seven.contains("STRASSE"));
        assert!(seven.iter().all(|w| char_len(w) == seven.length()));
    }

    #[test]
    fn check_word_checks_length_before_letters() {
        let words = WordSet::new(5);

        assert!(matches!(
            words.check_word("ab1"),
            Err(WordError::TooShort { len: 3, .. })
        ));
        assert!(matches!(
            words.check_word("abcdef!"),
            Err(WordError::TooLong { len: 7, .. })
        ));
        assert_eq!(words.check_word("ab1de"), Err(WordError::NotLetters));
        assert!(words.check_word("crane").is_ok());
    }

    #[test]
    fn check_word_does_not_mutate() {
        let words = five();
        let before = words.snapshot();

        words.check_word("BLIMP").unwrap();
        assert_eq!(words.snapshot(), before);
        assert!(!words.contains("BLIMP"));
    }

    #[test]
    fn from_words_stops_at_first_error() {
        let err = WordSet::from_words(5, ["crane", "nope", "slate"]).unwrap_err();
        assert!(matches!(err, WordError::TooShort { len: 4, .. }));
    }

    #[test]
    fn remove_present_and_absent() {
        let mut words = five();

        assert!(words.remove("CRANE"));
        assert!(!words.contains("CRANE"));
        assert!(!words.remove("CRANE"));
        // Case-sensitive, like contains
        assert!(!words.remove("slate"));
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_str_filters_by_length_only() {
        let mut words = WordSet::new(5);
        let added = words.load_str("crane\nab\nSlate \nlonger\nb1ake\ncrane\n");

        assert_eq!(added, 3);
        assert!(words.contains("CRANE"));
        assert!(words.contains("SLATE"));
        assert!(words.contains("B1AKE"));
        assert!(!words.contains("AB"));
    }

    #[test]
    fn load_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\nslate\nabc\nspeeds").unwrap();

        let mut words = WordSet::new(5);
        assert_eq!(words.load_file(file.path()), 2);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_file_missing_leaves_set_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut words = five();

        assert_eq!(words.load_file(dir.path().join("missing.txt")), 0);
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn load_file_with_unreadable_line_adds_nothing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"crane\nslate\ncaf\xe9s\nspeed\n").unwrap();

        let mut words = WordSet::from_words(5, ["blimp"]).unwrap();
        let before = words.snapshot();

        assert_eq!(words.load_file(file.path()), 0);
        assert_eq!(words.snapshot(), before);

        let err = words.try_load_file(file.path()).unwrap_err();
        assert!(matches!(
            &err,
            WordSetError::SourceUnavailable { source, .. }
                if source.kind() == io::ErrorKind::InvalidData
        ));
        assert_eq!(words.snapshot(), before);
    }

    #[test]
    fn try_load_file_reports_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let mut words = WordSet::new(5);

        let err = words.try_load_file(&path).unwrap_err();
        assert!(matches!(
            &err,
            WordSetError::SourceUnavailable { path: p, .. } if *p == path
        ));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn pick_random_returns_member() {
        let words = five();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let answer = words.pick_random(&mut rng).unwrap();
            assert!(words.contains(answer));
        }
    }

    #[test]
    fn pick_random_is_reproducible_with_seed() {
        let words = five();

        let first = words
            .pick_random(&mut StdRng::seed_from_u64(9))
            .unwrap()
            .to_string();
        let second = words.pick_random(&mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn pick_random_reaches_every_word() {
        let words = five();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = FxHashSet::default();

        for _ in 0..200 {
            seen.insert(words.pick_random(&mut rng).unwrap().to_string());
        }
        assert_eq!(seen, words.snapshot());
    }

    #[test]
    fn pick_random_empty() {
        let words = WordSet::new(5);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            words.pick_random(&mut rng),
            Err(WordSetError::Empty)
        ));
    }

    #[test]
    fn snapshot_is_independent() {
        let mut words = five();
        let mut copy = words.snapshot();

        copy.insert("BLIMP".to_string());
        words.remove("CRANE");

        assert!(!words.contains("BLIMP"));
        assert!(copy.contains("CRANE"));
        assert_eq!(copy.len(), 4);
    }

    #[test]
    fn iter_visits_all_words() {
        let words = five();
        let mut listed: Vec<&str> = words.iter().collect();
        listed.sort_unstable();

        assert_eq!(listed, vec!["CRANE", "SLATE", "SPEED"]);
    }

    #[test]
    fn word_set_display() {
        assert_eq!(five().to_string(), "WordSet of 3 words of length 5");
        assert_eq!(WordSet::new(5).length(), 5);
    }
}
