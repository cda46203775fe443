use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::de::IgnoredAny;
use tracing::debug;

/// Word -> definition. Definitions are syntax-checked and then dropped; only the keys are used.
pub type Dictionary = IndexMap<String, IgnoredAny>;

pub fn parse_dictionary<R: Read>(reader: R) -> serde_json::Result<Dictionary> {
    serde_json::from_reader(reader)
}

/// Reads a dictionary shaped like `{ "<word>": <definition>, ... }`,
/// e.g. the one at https://github.com/adambom/dictionary
pub fn read_dictionary(path: &Path) -> Result<Dictionary> {
    let file = File::open(path)
        .with_context(|| format!("{}: Failed to open dictionary.", path.display()))?;
    let dictionary = parse_dictionary(BufReader::new(file))
        .with_context(|| format!("{}: Failed to parse dictionary.", path.display()))?;
    debug!(n = dictionary.len(), path = %path.display(), "Read dictionary");
    Ok(dictionary)
}
