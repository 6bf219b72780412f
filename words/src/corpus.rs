//! Loading word lists and free text from disk.
//!
//! Reading happens here, before any timed lookups.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::error::{Error, Result};

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::resource_not_found(path, source))
}

/// Reads a word list with one word per line. Blank lines are skipped.
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let start = Instant::now();
    let words: Vec<String> = read(path)?
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();
    log::info!(
        "Loaded {} entries from {} in {:.3} seconds.",
        words.len(),
        path.display(),
        start.elapsed().as_secs_f64()
    );
    Ok(words)
}

/// Reads free text and splits every line into words with [`split_text_to_words`].
pub fn load_book(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let start = Instant::now();
    let words: Vec<String> = read(path)?
        .lines()
        .flat_map(split_text_to_words)
        .collect();
    log::info!(
        "Loaded {} entries from {} in {:.3} seconds.",
        words.len(),
        path.display(),
        start.elapsed().as_secs_f64()
    );
    Ok(words)
}

/// Splits on whitespace, trims punctuation from both ends of each token and
/// lowercases it. Inner punctuation such as `don't` or `well-known` is kept.
pub fn split_text_to_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}
