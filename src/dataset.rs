//! Emoji dataset loading.
//!
//! The wire format is a JSON array of `{"e": "😀", "v": 1.0}` objects.
//! Array order is the presentation order and is preserved.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::{DumpError, DumpResult, ErrorKind};

/// One emoji glyph and the Unicode version that introduced it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EmojiRecord {
    #[serde(rename = "e")]
    pub glyph: String,
    #[serde(rename = "v")]
    pub version: f64,
}

/// Load the dataset once at startup. Failures here are fatal to the
/// session, unlike per-command validation errors.
pub fn load_dataset(path: &Path) -> DumpResult<Vec<EmojiRecord>> {
    let content = fs::read_to_string(path).map_err(|err| {
        DumpError::new(
            ErrorKind::Dataset,
            format!("cannot read {}: {err}", path.display()),
        )
    })?;
    let records: Vec<EmojiRecord> = serde_json::from_str(&content).map_err(|err| {
        DumpError::new(
            ErrorKind::Dataset,
            format!("cannot parse {}: {err}", path.display()),
        )
        .with_context(r#"Expected a JSON array of {"e": glyph, "v": version} objects"#)
    })?;
    debug!(
        "dataset event=load path={} count={}",
        path.display(),
        records.len()
    );
    Ok(records)
}
