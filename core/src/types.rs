//! Specification types for registered arguments and options.
//!
//! This module defines the data model a [`CommandParser`](crate::CommandParser)
//! is populated with: positional [`ArgSpec`] entries, flagged [`OptionSpec`]
//! entries, and the serializable [`CommandSpec`] bundle that snapshots a whole
//! registry. The types derive [`serde`] traits and round-trip through JSON.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum length of an argument name or an option long name (including `--`).
pub const MAX_NAME_LEN: usize = 32;

/// Maximum length of an option short name (including `-`).
pub const MAX_SHORT_LEN: usize = 16;

/// Identifier rule shared by argument names and option name stems: an ASCII
/// letter followed by letters, digits, or underscores.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("name pattern must compile"));

/// Checks whether `name` follows the identifier rule.
///
/// Length limits are enforced separately by the registry, since they differ
/// between argument names, long names, and short names.
pub(crate) fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// Specification of a positional argument.
///
/// Arguments are matched by declaration order, not by a flag token. At most
/// one argument in a registry may be a *pack* — the entry absorbing every
/// positional token left over once the fixed arguments have consumed theirs.
///
/// # Examples
///
/// ```
/// use argspec_core::ArgSpec;
///
/// let file = ArgSpec::new("file").with_note("text file path");
/// assert!(!file.is_pack);
///
/// let sources = ArgSpec::pack("sources").numeric();
/// assert!(sources.is_pack);
/// assert!(sources.numeric_only);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgSpec {
    /// Argument name (letter first, then letters/digits/underscore, ≤ 32 chars).
    pub name: String,
    /// Help-text note shown in the argument table.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
    /// Whether every token bound to this argument must parse as an integer.
    #[serde(default)]
    pub numeric_only: bool,
    /// Whether this argument absorbs the variable-length positional tail.
    #[serde(default)]
    pub is_pack: bool,
}

impl ArgSpec {
    /// Creates a fixed (single-token) argument specification.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            note: String::new(),
            numeric_only: false,
            is_pack: false,
        }
    }

    /// Creates a pack argument specification.
    pub fn pack(name: &str) -> Self {
        Self {
            is_pack: true,
            ..Self::new(name)
        }
    }

    /// Adds a help-text note.
    pub fn with_note(mut self, note: &str) -> Self {
        self.note = note.to_string();
        self
    }

    /// Restricts the argument to integer-parseable values.
    pub fn numeric(mut self) -> Self {
        self.numeric_only = true;
        self
    }
}

/// Specification of a flagged option.
///
/// An option is keyed by its long name (`--lines`), optionally aliased by a
/// globally unique short name (`-l`), and consumes exactly `arity` tokens
/// following its occurrence as its values.
///
/// The `index` field records registration order. Usage and help text always
/// list options in that order, never in lexical order of the name.
///
/// # Examples
///
/// ```
/// use argspec_core::OptionSpec;
///
/// let lines = OptionSpec::new("--lines", 1)
///     .with_short("-l")
///     .with_note("line count to show")
///     .numeric();
/// assert!(lines.matches("-l"));
/// assert!(lines.matches("--lines"));
/// assert!(!lines.matches("--back"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Long name, starting with `--` (total length 3..=32).
    pub long: String,
    /// Optional short name, starting with `-` (total length 2..=16).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
    /// Help-text note shown in the option table.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
    /// Number of value tokens consumed after the option token.
    #[serde(default)]
    pub arity: usize,
    /// Whether every consumed value must parse as an integer.
    #[serde(default)]
    pub numeric_only: bool,
    /// Registration order; assigned by the registry, governs display order.
    #[serde(skip)]
    pub index: usize,
}

impl OptionSpec {
    /// Creates an option specification with the given long name and arity.
    pub fn new(long: &str, arity: usize) -> Self {
        Self {
            long: long.to_string(),
            short: None,
            note: String::new(),
            arity,
            numeric_only: false,
            index: 0,
        }
    }

    /// Adds a short-name alias.
    pub fn with_short(mut self, short: &str) -> Self {
        self.short = Some(short.to_string());
        self
    }

    /// Adds a help-text note.
    pub fn with_note(mut self, note: &str) -> Self {
        self.note = note.to_string();
        self
    }

    /// Restricts the option's values to integer-parseable tokens.
    pub fn numeric(mut self) -> Self {
        self.numeric_only = true;
        self
    }

    /// Checks whether a token matches this option's long or short name.
    pub fn matches(&self, token: &str) -> bool {
        self.long == token || self.short.as_deref() == Some(token)
    }
}

/// Serializable snapshot of a parser's registered specification.
///
/// Bundles the command identity with its argument and option definitions
/// (options in registration order), making a registry exportable as JSON and
/// rebuildable with [`CommandParser::from_spec`](crate::CommandParser::from_spec).
///
/// # Examples
///
/// ```
/// use argspec_core::{ArgSpec, CommandSpec};
///
/// let mut spec = CommandSpec::new("show");
/// spec.arguments.push(ArgSpec::new("file").with_note("text file path"));
///
/// let json = spec.to_json().unwrap();
/// let restored = CommandSpec::from_json(&json).unwrap();
/// assert_eq!(restored, spec);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Command name shown in generated help text.
    pub command: String,
    /// Command note shown under the usage line.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub note: String,
    /// Positional arguments in declaration order.
    #[serde(default)]
    pub arguments: Vec<ArgSpec>,
    /// Options in registration order.
    #[serde(default)]
    pub options: Vec<OptionSpec>,
}

impl CommandSpec {
    /// Creates an empty specification for the named command.
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
            note: String::new(),
            arguments: Vec::new(),
            options: Vec::new(),
        }
    }

    /// Serializes the specification to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a specification from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rule_accepts_identifiers() {
        assert!(is_valid_name("file"));
        assert!(is_valid_name("line_count"));
        assert!(is_valid_name("v2"));
        assert!(is_valid_name("X"));
    }

    #[test]
    fn test_name_rule_rejects_malformed() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("2fast"));
        assert!(!is_valid_name("_hidden"));
        assert!(!is_valid_name("has-dash"));
        assert!(!is_valid_name("has space"));
        assert!(!is_valid_name("-l"));
    }

    #[test]
    fn test_option_spec_matches() {
        let option = OptionSpec::new("--back", 0).with_short("-b");
        assert!(option.matches("--back"));
        assert!(option.matches("-b"));
        assert!(!option.matches("back"));

        let long_only = OptionSpec::new("--verbose", 0);
        assert!(!long_only.matches("-v"));
    }

    #[test]
    fn test_command_spec_json_round_trip() {
        let mut spec = CommandSpec::new("show");
        spec.note = "show text file context".to_string();
        spec.arguments.push(ArgSpec::new("file").with_note("text file path"));
        spec.arguments.push(ArgSpec::pack("extras"));
        spec.options.push(
            OptionSpec::new("--lines", 1)
                .with_short("-l")
                .with_note("line count to show")
                .numeric(),
        );

        let json = spec.to_json().expect("serialize");
        let restored = CommandSpec::from_json(&json).expect("deserialize");
        assert_eq!(restored, spec);
    }

    #[test]
    fn test_command_spec_defaults_on_sparse_json() {
        let spec = CommandSpec::from_json(r#"{"command": "tool"}"#).expect("deserialize");
        assert_eq!(spec.command, "tool");
        assert!(spec.note.is_empty());
        assert!(spec.arguments.is_empty());
        assert!(spec.options.is_empty());
    }
}
