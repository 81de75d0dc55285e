//! `show` — print a text file, optionally only the first or last N lines.
//!
//! Demo front end for `argspec-core`: registers one positional argument and
//! two options, parses the process arguments through the terminating
//! convenience path, and slices the file accordingly.

use std::env;
use std::fs;
use std::process;

use argspec_core::{CommandParser, RegistrationError};

fn build_parser() -> Result<CommandParser, RegistrationError> {
    let mut parser = CommandParser::new("show").with_note("show text file context");
    parser.add_argument("file", "text file path", false)?;
    parser.add_option("--lines", 1, Some("-l"), "line count to show", true)?;
    parser.add_option("--back", 0, Some("-b"), "from the back", false)?;
    Ok(parser)
}

fn main() {
    let mut parser = match build_parser() {
        Ok(parser) => parser,
        Err(error) => {
            eprintln!("{error}");
            process::exit(1);
        }
    };
    parser.parse_or_exit(env::args());

    let path = parser["file"].to_string();
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(error) => {
            eprintln!("failed to open file {path}: {error}");
            eprintln!("{}", parser.usage_info());
            process::exit(1);
        }
    };

    // --lines is pre-validated numeric; negative counts clamp to zero.
    let line_count = parser["--lines"]
        .is_present()
        .then(|| parser["-l"].to_i64().unwrap_or(0).max(0) as usize);

    let lines: Vec<&str> = text.lines().collect();
    for line in select_lines(&lines, line_count, parser["--back"].is_present()) {
        println!("{line}");
    }
}

/// Picks the first `count` lines, or the last `count` with `from_back`;
/// `None` keeps everything.
fn select_lines<'a>(lines: &[&'a str], count: Option<usize>, from_back: bool) -> Vec<&'a str> {
    match count {
        None => lines.to_vec(),
        Some(count) if from_back => lines[lines.len().saturating_sub(count)..].to_vec(),
        Some(count) => lines.iter().take(count).copied().collect(),
    }
}
