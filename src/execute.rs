//! Option validation and the dump pipeline.
//!
//! Steps run in a fixed order: `unicode` filter, `shuffle`, `max` truncate,
//! `join` separator, render, `zoom`. The first invalid option aborts the
//! command; transformations from earlier steps have already been applied by
//! then. That ordering is part of the observable contract — a bad `max`
//! must surface even when the version filter already ran, and a bad `zoom`
//! fails the whole command after rendering.

use log::debug;

use crate::dataset::EmojiRecord;
use crate::error::DumpError;
use crate::options::{self, format_version, Validation, MAX_UNICODE_VERSION};
use crate::parse::ParsedOptions;

/// A successful dump and its presentation parameters.
#[derive(Debug, Clone)]
pub struct Dump {
    /// Glyphs of the final working sequence, joined with `separator`.
    pub rendered: String,
    pub separator: &'static str,
    /// Set only when the user asked for a zoom level.
    pub zoom: Option<i64>,
    /// One-line human-readable description of what was dumped.
    pub summary: String,
}

/// Terminal result of one command: all-or-nothing.
#[derive(Debug, Clone)]
pub enum Outcome {
    Success(Dump),
    Failure(DumpError),
}

/// Run one parsed command against the source dataset.
///
/// `source` is never mutated; the pipeline works on its own copy. The RNG
/// is an explicit argument so shuffles are seedable in tests.
pub fn execute(
    options: &ParsedOptions,
    source: &[EmojiRecord],
    rng: &mut fastrand::Rng,
) -> Outcome {
    let mut working = source.to_vec();

    let effective_version = match options::unicode_version(options) {
        Validation::Invalid(err) => return Outcome::Failure(err),
        Validation::Valid(version) => {
            working.retain(|record| record.version <= version);
            debug!(
                "dump event=filter version={} kept={} of={}",
                format_version(version),
                working.len(),
                source.len()
            );
            version
        }
        Validation::Absent => MAX_UNICODE_VERSION,
    };

    let shuffled = match options::shuffle_flag(options) {
        Validation::Invalid(err) => return Outcome::Failure(err),
        Validation::Valid(flag) => {
            if flag {
                debug!("dump event=shuffle count={}", working.len());
                rng.shuffle(&mut working);
            }
            flag
        }
        Validation::Absent => false,
    };

    let max = match options::max_count(options) {
        Validation::Invalid(err) => return Outcome::Failure(err),
        Validation::Valid(count) => {
            // A max beyond the remaining count is a no-op, not an error.
            if count < working.len() as i64 {
                debug!("dump event=truncate max={count} before={}", working.len());
                working.truncate(count.max(0) as usize);
            }
            Some(count)
        }
        Validation::Absent => None,
    };

    let separator = match options::join_flag(options) {
        Validation::Invalid(err) => return Outcome::Failure(err),
        Validation::Valid(true) => "",
        Validation::Valid(false) | Validation::Absent => " ",
    };

    let rendered: String = working
        .iter()
        .map(|record| record.glyph.as_str())
        .collect::<Vec<_>>()
        .join(separator);
    debug!(
        "dump event=render count={} separator={separator:?}",
        working.len()
    );

    let zoom = match options::zoom_level(options) {
        Validation::Invalid(err) => return Outcome::Failure(err),
        Validation::Valid(level) => Some(level),
        Validation::Absent => None,
    };

    let mut summary = format!(
        "Dumped {} of {} emojis (unicode <= {}, shuffle: {shuffled}",
        working.len(),
        source.len(),
        format_version(effective_version)
    );
    if let Some(count) = max {
        summary.push_str(&format!(", max: {count}"));
    }
    if let Some(level) = zoom {
        summary.push_str(&format!(", zoom: {level}"));
    }
    summary.push(')');

    Outcome::Success(Dump {
        rendered,
        separator,
        zoom,
        summary,
    })
}
