//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::{ALLOWED, ANSWERS, Dictionary};
use crate::core::Word;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            let word = Word::new(trimmed).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();

    if skipped > 0 {
        warn!(skipped, "Ignored invalid entries in word list");
    }

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Build a dictionary from the `--wordlist` setting
///
/// - "all": embedded answers as targets, every embedded word accepted as a guess
/// - "answers": embedded answers for both targets and guesses
/// - "<path>": words from the file for both targets and guesses
///
/// # Errors
///
/// Returns an error if a custom file cannot be read or has no valid words.
pub fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    let dictionary = match wordlist {
        "all" => Dictionary::new(words_from_slice(ANSWERS), words_from_slice(ALLOWED))?,
        "answers" => Dictionary::from_words(words_from_slice(ANSWERS))?,
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to read word list {path}"))?;
            Dictionary::from_words(words)
                .with_context(|| format!("Word list {path} is unusable"))?
        }
    };

    info!(
        wordlist,
        answers = dictionary.answers().len(),
        allowed = dictionary.allowed_count(),
        "Dictionary loaded"
    );
    Ok(dictionary)
}
