//! Declarative command-line argument and option parsing.
//!
//! This crate models a command's expected invocation up front and then
//! classifies the raw argument vector against it:
//!
//! - [`CommandParser`] — registry of positional arguments and flagged
//!   options, the parse entry points, and value lookup.
//! - [`ArgSpec`] / [`OptionSpec`] — the registered definitions (one positional
//!   argument may be a *pack* absorbing the variable-length tail; options
//!   consume a fixed number of trailing value tokens).
//! - [`Value`] — the tri-state lookup result (absent / single / multi) with
//!   typed accessors.
//! - [`CommandSpec`] — a serializable snapshot of a registry, rebuildable via
//!   [`CommandParser::from_spec`].
//!
//! Usage and help text are generated from the registry
//! ([`CommandParser::usage_info`], [`CommandParser::help_info`]), and a sole
//! `--help`/`--usage` token short-circuits a parse with the rendered text.
//!
//! Registration failures are ordinary [`RegistrationError`] values; parse
//! failures are fatal to that parse and reported as [`ParseError`]. Binary
//! front ends that just want the classic print-and-exit behavior can call
//! [`CommandParser::parse_or_exit`].
//!
//! # Example
//!
//! ```
//! use argspec_core::CommandParser;
//!
//! let mut parser = CommandParser::new("show").with_note("show text file context");
//! parser.add_argument("file", "text file path", false)?;
//! parser.add_option("--lines", 1, Some("-l"), "line count to show", true)?;
//! parser.add_option("--back", 0, Some("-b"), "from the back", false)?;
//!
//! parser.parse(["show", "notes.txt", "--lines", "5"])?;
//!
//! assert_eq!(parser["file"].as_str(), Some("notes.txt"));
//! assert_eq!(parser["--lines"].to_i64()?, 5);
//! assert_eq!(parser["-l"], parser["--lines"]);
//! assert!(!parser["--back"].is_present());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod help;
mod parser;
mod types;
mod value;

pub use error::{ConversionError, ParseError, RegistrationError};
pub use parser::{CommandParser, ParseOutcome};
pub use types::{ArgSpec, CommandSpec, MAX_NAME_LEN, MAX_SHORT_LEN, OptionSpec};
pub use value::Value;
