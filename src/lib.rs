//! Command parsing and dump pipeline for emojidump.
//!
//! This crate exposes a minimal API so unit and integration tests can link
//! the parsing and pipeline logic without pulling in interactive deps.

mod dataset;
mod error;
mod execute;
mod options;
mod parse;

#[cfg(feature = "repl")]
pub mod repl;

pub use dataset::{load_dataset, EmojiRecord};
pub use error::{DumpError, DumpResult, ErrorKind};
pub use execute::{execute, Dump, Outcome};
pub use parse::{parse, OptionValue, ParsedOptions};
