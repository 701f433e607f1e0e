//! Word source reading
//!
//! Word sources are plain text, one candidate per line, in any case and with
//! arbitrary surrounding whitespace. Lines that do not have the requested
//! length are skipped without complaint.

use crate::core::char_len;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read every `length`-letter line of a file, trimmed and uppercased
///
/// Only lengths are checked here. The file is closed on every exit path,
/// including a read error part way through.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or a line cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_rules::wordset::loader::read_words;
///
/// let words = read_words("data/words.txt", 5).unwrap();
/// println!("Read {} words", words.len());
/// ```
pub fn read_words<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);

    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize_line(&line?, length) {
            words.push(word);
        }
    }

    Ok(words)
}

/// Same as [`read_words`] over an in-memory source
#[must_use]
pub fn words_from_str(text: &str, length: usize) -> Vec<String> {
    text.lines()
        .filter_map(|line| normalize_line(line, length))
        .collect()
}

fn normalize_line(line: &str, length: usize) -> Option<String> {
    let word = line.trim().to_uppercase();
    (char_len(&word) == length).then_some(word)
}
