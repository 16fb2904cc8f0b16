//! Interactive loop and outcome rendering.
//!
//! The terminal analogue of the original page: a successful command prints
//! the dump and a feedback line; a failed one prints the error and the help
//! text. Prior output scrolls away naturally, it is never cleared.

use std::env;
use std::io;
use std::path::PathBuf;

use log::debug;
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};

use crate::dataset::EmojiRecord;
use crate::execute::{execute, Outcome};
use crate::parse;

pub const HELP_TEXT: &str = "\
Options (name=value, whitespace separated; anything else is ignored):
  unicode=V   keep emojis introduced up to Unicode V (e.g. unicode=9.0)
  shuffle=B   true shuffles the dump
  max=N       keep at most the first N emojis
  join=B      true joins glyphs with no separator
  zoom=N      presentation zoom, 1 to 4";

fn history_path() -> PathBuf {
    env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(".emojidump_history")
}

/// Read commands until EOF. Each line is parsed and executed against the
/// immutable source dataset.
pub fn run_loop(source: &[EmojiRecord], rng: &mut fastrand::Rng) -> io::Result<()> {
    let config = Config::builder().auto_add_history(true).build();
    let mut editor = DefaultEditor::with_config(config).map_err(io::Error::other)?;
    let _ = editor.load_history(&history_path());

    loop {
        let line = match editor.readline("emojidump> ") {
            Ok(line) => line,
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => break,
            Err(err) => return Err(io::Error::other(err)),
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        run_command(trimmed, source, rng);
    }

    let _ = editor.save_history(&history_path());
    Ok(())
}

/// Execute one command line and render the outcome. Returns whether the
/// command succeeded.
pub fn run_command(line: &str, source: &[EmojiRecord], rng: &mut fastrand::Rng) -> bool {
    let options = parse::parse(line);
    debug!("command event=parsed entries={}", options.len());
    match execute(&options, source, rng) {
        Outcome::Success(dump) => {
            println!("{}", dump.rendered);
            match dump.zoom {
                Some(level) => println!("[zoom {level}] {}", dump.summary),
                None => println!("{}", dump.summary),
            }
            true
        }
        Outcome::Failure(err) => {
            eprintln!("{err}");
            eprintln!("{HELP_TEXT}");
            false
        }
    }
}
