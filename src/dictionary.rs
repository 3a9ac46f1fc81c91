//! Word list loading, normalization and the filtered-word cache.
//!
//! A raw word source may contain words of any length, mixed case and
//! accented letters. Normalization reduces it to unique ASCII-lowercase
//! words of the configured length. The normalized result is written to a
//! sibling cache file so later runs can skip the whole analysis.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use itertools::Itertools;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Read a plain text word list, one word per line.
pub fn read_word_list(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    BufReader::new(file).lines().collect()
}

/// Normalize raw lines into unique lowercase ASCII words of `word_length`.
///
/// The length check runs against the raw line, before accent stripping, so
/// a word in decomposed form carrying a combining mark counts one character
/// longer than its stripped equivalent.
pub fn normalize<I>(lines: I, word_length: usize) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines
        .into_iter()
        .filter(|line| line.as_ref().chars().count() == word_length)
        .map(|line| strip_diacritics(&line.as_ref().to_lowercase()))
        .filter(|word| !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase()))
        .unique()
        .collect()
}

/// Decompose to NFD and drop combining marks, so "café" becomes "cafe".
fn strip_diacritics(word: &str) -> String {
    word.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Path of the normalized cache next to the source list:
/// `words_en.txt` → `words_en_filtered.txt`.
pub fn cache_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("words");
    source.with_file_name(format!("{stem}_filtered.txt"))
}

/// Write the normalized words to the cache file, one per line.
pub fn write_cache(path: &Path, words: &[String]) -> io::Result<()> {
    let mut file = File::create(path)?;
    for word in words {
        writeln!(file, "{word}")?;
    }
    Ok(())
}
