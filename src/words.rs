use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use itertools::Itertools;
use tracing::info;

use crate::dictionary::Dictionary;

/// Record boundary of the word list. Words are split on this, not on line breaks.
pub const ITEM_SEPARATOR: &str = "\n@@@\n";
pub const TEST_DATA_FOLDER: &str = "./test_data";
pub const WORDS_FILE: &str = "words";

pub fn words_path() -> PathBuf {
    Path::new(TEST_DATA_FOLDER).join(WORDS_FILE)
}

/// Dictionary keys in ascending code point order
pub fn sorted_words(dictionary: &Dictionary) -> Vec<&str> {
    dictionary.keys().map(String::as_str).sorted().collect()
}

/// Every word is followed by the separator, the last one included.
pub fn write_words<W: Write>(mut out: W, words: &[&str]) -> io::Result<()> {
    for word in words {
        out.write_all(word.as_bytes())?;
        out.write_all(ITEM_SEPARATOR.as_bytes())?;
    }
    Ok(())
}

/// Truncates `path` and writes the sorted word list to it. The parent directory must exist.
pub fn write_words_file(path: &Path, dictionary: &Dictionary) -> Result<usize> {
    let words = sorted_words(dictionary);
    let file = File::create(path)
        .with_context(|| format!("{}: Failed to create word list.", path.display()))?;
    let mut out = BufWriter::new(file);
    write_words(&mut out, &words)
        .and_then(|_| out.flush())
        .with_context(|| format!("{}: Failed to write word list.", path.display()))?;
    info!(n = words.len(), path = %path.display(), "Wrote word list");
    Ok(words.len())
}
