//! Argument-vector parsing against a registered specification.

use std::collections::HashMap;
use std::process;

use tracing::{debug, warn};

use crate::error::{ParseError, RegistrationError};
use crate::help;
use crate::types::{ArgSpec, CommandSpec, MAX_NAME_LEN, MAX_SHORT_LEN, OptionSpec, is_valid_name};
use crate::value::Value;

/// Display name used when a parser is constructed without one.
const DEFAULT_COMMAND_NAME: &str = "command";

static ABSENT: Value = Value::Absent;

/// Successful result of [`CommandParser::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The vector was classified and validated; values are ready for lookup.
    Parsed,
    /// `--help` was the sole token and is not a registered option; carries the
    /// rendered help text. No values were produced.
    Help(String),
    /// `--usage` was the sole token and is not a registered option; carries
    /// the rendered usage text. No values were produced.
    Usage(String),
}

/// Declarative parser for a command's argument vector.
///
/// A parser is populated once with positional arguments and flagged options,
/// then fed the raw process arguments. Tokens are classified against the
/// registered names, validated (arity, counts, numeric-only constraints), and
/// exposed through [`get`](CommandParser::get) or index lookup.
///
/// # Examples
///
/// ```
/// use argspec_core::{CommandParser, ParseOutcome};
///
/// let mut parser = CommandParser::new("show").with_note("show text file context");
/// parser.add_argument("file", "text file path", false)?;
/// parser.add_option("--lines", 1, Some("-l"), "line count to show", true)?;
/// parser.add_option("--back", 0, Some("-b"), "from the back", false)?;
///
/// let outcome = parser.parse(["show", "notes.txt", "--lines", "5"])?;
/// assert_eq!(outcome, ParseOutcome::Parsed);
/// assert_eq!(parser["file"].as_str(), Some("notes.txt"));
/// assert_eq!(parser["-l"].to_i64()?, 5);
/// assert!(!parser["--back"].is_present());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct CommandParser {
    name: String,
    note: String,
    arguments: Vec<ArgSpec>,
    has_pack: bool,
    options: HashMap<String, OptionSpec>,
    short_names: HashMap<String, String>,
    invocation_path: Option<String>,
    values: HashMap<String, Value>,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND_NAME)
    }
}

impl CommandParser {
    /// Creates a parser for the named command.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            note: String::new(),
            arguments: Vec::new(),
            has_pack: false,
            options: HashMap::new(),
            short_names: HashMap::new(),
            invocation_path: None,
            values: HashMap::new(),
        }
    }

    /// Sets the command note shown under the usage line in help text.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// The declared command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared command note.
    pub fn note(&self) -> &str {
        &self.note
    }

    /// Registers a positional argument.
    ///
    /// Rejects names that violate the identifier rule (letter first, then
    /// letters/digits/underscore, ≤ 32 chars) or collide with an existing
    /// argument.
    pub fn add_argument(
        &mut self,
        name: &str,
        note: &str,
        numeric_only: bool,
    ) -> Result<(), RegistrationError> {
        self.insert_argument(name, note, numeric_only, false)
    }

    /// Registers the pack argument absorbing the variable-length positional
    /// tail. Only one pack may exist per parser.
    pub fn add_argument_pack(
        &mut self,
        name: &str,
        note: &str,
        numeric_only: bool,
    ) -> Result<(), RegistrationError> {
        if self.has_pack {
            let existing = self
                .arguments
                .iter()
                .find(|argument| argument.is_pack)
                .map(|argument| argument.name.clone())
                .unwrap_or_default();
            warn!(name, existing = %existing, "argument pack rejected: one is already registered");
            return Err(RegistrationError::PackAlreadyRegistered(existing));
        }
        self.insert_argument(name, note, numeric_only, true)
    }

    fn insert_argument(
        &mut self,
        name: &str,
        note: &str,
        numeric_only: bool,
        is_pack: bool,
    ) -> Result<(), RegistrationError> {
        if name.len() > MAX_NAME_LEN || !is_valid_name(name) {
            warn!(name, "argument rejected: invalid name");
            return Err(RegistrationError::InvalidArgumentName(name.to_string()));
        }
        if self.arguments.iter().any(|argument| argument.name == name) {
            warn!(name, "argument rejected: duplicate name");
            return Err(RegistrationError::DuplicateArgument(name.to_string()));
        }
        self.arguments.push(ArgSpec {
            name: name.to_string(),
            note: note.to_string(),
            numeric_only,
            is_pack,
        });
        self.has_pack |= is_pack;
        Ok(())
    }

    /// Registers a flagged option consuming `arity` trailing tokens.
    ///
    /// The long name must start with `--` (3..=32 chars); the optional short
    /// name must start with `-` (2..=16 chars) and be unique across all short
    /// names. Both stems follow the identifier rule.
    pub fn add_option(
        &mut self,
        long: &str,
        arity: usize,
        short: Option<&str>,
        note: &str,
        numeric_only: bool,
    ) -> Result<(), RegistrationError> {
        if self.options.contains_key(long) {
            warn!(option = long, "option rejected: duplicate long name");
            return Err(RegistrationError::DuplicateOption(long.to_string()));
        }
        let stem = long.strip_prefix("--");
        if long.len() > MAX_NAME_LEN || !stem.is_some_and(is_valid_name) {
            warn!(option = long, "option rejected: invalid long name");
            return Err(RegistrationError::InvalidOptionName(long.to_string()));
        }
        if let Some(short) = short {
            if self.short_names.contains_key(short) {
                warn!(option = long, short, "option rejected: duplicate short name");
                return Err(RegistrationError::DuplicateShortName(short.to_string()));
            }
            let stem = short.strip_prefix('-');
            if short.len() > MAX_SHORT_LEN || !stem.is_some_and(is_valid_name) {
                warn!(option = long, short, "option rejected: invalid short name");
                return Err(RegistrationError::InvalidShortName(short.to_string()));
            }
            self.short_names.insert(short.to_string(), long.to_string());
        }
        self.options.insert(
            long.to_string(),
            OptionSpec {
                long: long.to_string(),
                short: short.map(str::to_string),
                note: note.to_string(),
                arity,
                numeric_only,
                index: self.options.len(),
            },
        );
        Ok(())
    }

    /// Parses an argument vector. The first element is the invocation path;
    /// the remaining elements are the tokens to classify.
    ///
    /// The previous parse's values are discarded up front. On success the
    /// result map is rebuilt and `Parsed` is returned — unless the vector was
    /// exactly `--help` or `--usage` (and the token is not a registered
    /// option), which short-circuits with the rendered text instead.
    ///
    /// All validation failures are fatal to the parse: a malformed invocation
    /// cannot produce a meaningful partial result, so no values are published.
    pub fn parse<I, S>(&mut self, args: I) -> Result<ParseOutcome, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.invocation_path = None;
        self.values.clear();

        let mut args = args.into_iter().map(Into::into);
        let Some(path) = args.next() else {
            return Err(ParseError::EmptyArgumentVector);
        };
        self.invocation_path = Some(path);
        let tokens: Vec<String> = args.collect();

        if let [sole] = tokens.as_slice() {
            if sole == "--help" && !self.options.contains_key("--help") {
                return Ok(ParseOutcome::Help(self.help_info()));
            }
            if sole == "--usage" && !self.options.contains_key("--usage") {
                return Ok(ParseOutcome::Usage(self.usage_info()));
            }
        }

        let (positionals, captured) = self.classify(&tokens)?;
        debug!(
            positionals = positionals.len(),
            options = captured.len(),
            "classified argument vector"
        );
        self.check_positionals(&positionals)?;
        self.assemble(positionals, captured);
        Ok(ParseOutcome::Parsed)
    }

    /// Terminating convenience around [`parse`](CommandParser::parse) for
    /// binary front ends.
    ///
    /// Help/usage short-circuits print to stdout and exit 0. Parse errors
    /// print the diagnostic, the usage text, and a `--help` hint (suppressed
    /// when `--help` is itself registered) to stderr, then exit non-zero.
    pub fn parse_or_exit<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match self.parse(args) {
            Ok(ParseOutcome::Parsed) => {}
            Ok(ParseOutcome::Help(text)) | Ok(ParseOutcome::Usage(text)) => {
                println!("{text}");
                process::exit(0);
            }
            Err(error) => {
                eprintln!("{error}");
                eprintln!("{}", self.usage_info());
                if !self.options.contains_key("--help") {
                    eprintln!(
                        "Try '{} --help' for more information.",
                        self.invocation_display()
                    );
                }
                process::exit(-1);
            }
        }
    }

    /// Looks up a parsed value by argument name, option long name, or option
    /// short name. Unknown or unmatched names yield [`Value::Absent`].
    ///
    /// The value is copied out, so it stays usable independently of later
    /// parses.
    pub fn get(&self, name: &str) -> Value {
        self.values.get(name).cloned().unwrap_or_default()
    }

    /// Renders the one-line usage summary under the last invocation path
    /// (falling back to the declared command name).
    pub fn usage_info(&self) -> String {
        help::usage_line(
            self.invocation_display(),
            &self.arguments,
            &self.ordered_options(),
        )
    }

    /// Renders the full help text under the declared command name; the
    /// invocation path is deliberately not used, keeping help output stable
    /// across install locations.
    pub fn help_info(&self) -> String {
        help::help_text(
            self.display_name(),
            &self.note,
            &self.arguments,
            &self.ordered_options(),
        )
    }

    /// Exports the registered specification as a serializable snapshot.
    pub fn spec(&self) -> CommandSpec {
        CommandSpec {
            command: self.name.clone(),
            note: self.note.clone(),
            arguments: self.arguments.clone(),
            options: self.ordered_options().into_iter().cloned().collect(),
        }
    }

    /// Rebuilds a parser from a specification snapshot.
    ///
    /// Every entry passes through the normal registration path, so a
    /// malformed snapshot is rejected with the same [`RegistrationError`]
    /// values direct registration would produce.
    pub fn from_spec(spec: CommandSpec) -> Result<Self, RegistrationError> {
        let mut parser = Self::new(spec.command).with_note(spec.note);
        for argument in &spec.arguments {
            if argument.is_pack {
                parser.add_argument_pack(&argument.name, &argument.note, argument.numeric_only)?;
            } else {
                parser.add_argument(&argument.name, &argument.note, argument.numeric_only)?;
            }
        }
        for option in &spec.options {
            parser.add_option(
                &option.long,
                option.arity,
                option.short.as_deref(),
                &option.note,
                option.numeric_only,
            )?;
        }
        Ok(parser)
    }

    fn display_name(&self) -> &str {
        if self.name.is_empty() {
            DEFAULT_COMMAND_NAME
        } else {
            &self.name
        }
    }

    fn invocation_display(&self) -> &str {
        self.invocation_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| self.display_name())
    }

    /// Options in registration order; the map itself is keyed for lookup.
    fn ordered_options(&self) -> Vec<&OptionSpec> {
        let mut options: Vec<&OptionSpec> = self.options.values().collect();
        options.sort_by_key(|option| option.index);
        options
    }

    /// Splits tokens into positionals and per-option captured values, each
    /// option consuming its declared arity. A repeated option keeps only its
    /// latest invocation's values.
    fn classify(
        &self,
        tokens: &[String],
    ) -> Result<(Vec<String>, HashMap<String, Vec<String>>), ParseError> {
        let mut positionals = Vec::new();
        let mut captured: HashMap<String, Vec<String>> = HashMap::new();

        let mut i = 0;
        while i < tokens.len() {
            let token = tokens[i].as_str();
            let long = if self.options.contains_key(token) {
                Some(token)
            } else {
                self.short_names.get(token).map(String::as_str)
            };
            let Some(long) = long else {
                positionals.push(token.to_string());
                i += 1;
                continue;
            };

            let option = &self.options[long];
            let mut values = Vec::with_capacity(option.arity);
            for consumed in 0..option.arity {
                i += 1;
                let Some(value) = tokens.get(i) else {
                    return Err(ParseError::MissingOptionValues {
                        option: long.to_string(),
                        expected: option.arity,
                        actual: consumed,
                    });
                };
                if option.numeric_only && value.parse::<i64>().is_err() {
                    return Err(ParseError::NonNumericOptionValue {
                        option: long.to_string(),
                        value: value.clone(),
                    });
                }
                values.push(value.clone());
            }
            captured.insert(long.to_string(), values);
            i += 1;
        }

        Ok((positionals, captured))
    }

    /// Enforces the positional arity regime and per-token numeric constraints.
    fn check_positionals(&self, positionals: &[String]) -> Result<(), ParseError> {
        if self.has_pack {
            let base = self.arguments.len() - 1;
            if positionals.len() < base {
                return Err(ParseError::InsufficientArguments {
                    minimum: base,
                    actual: positionals.len(),
                });
            }
            let pack_len = positionals.len() - base;
            let mut cursor = 0;
            for argument in &self.arguments {
                if argument.is_pack {
                    if pack_len == 0 {
                        return Err(ParseError::EmptyArgumentPack {
                            pack: argument.name.clone(),
                        });
                    }
                    for value in &positionals[cursor..cursor + pack_len] {
                        if argument.numeric_only && value.parse::<i64>().is_err() {
                            return Err(ParseError::NonNumericPackValue {
                                pack: argument.name.clone(),
                                value: value.clone(),
                            });
                        }
                    }
                    cursor += pack_len;
                } else {
                    if argument.numeric_only && positionals[cursor].parse::<i64>().is_err() {
                        return Err(ParseError::NonNumericArgument {
                            argument: argument.name.clone(),
                            value: positionals[cursor].clone(),
                        });
                    }
                    cursor += 1;
                }
            }
        } else {
            if positionals.len() != self.arguments.len() {
                return Err(ParseError::ArgumentCountMismatch {
                    expected: self.arguments.len(),
                    actual: positionals.len(),
                    pairs: mismatch_pairs(&self.arguments, positionals),
                });
            }
            for (argument, value) in self.arguments.iter().zip(positionals) {
                if argument.numeric_only && value.parse::<i64>().is_err() {
                    return Err(ParseError::NonNumericArgument {
                        argument: argument.name.clone(),
                        value: value.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Publishes validated tokens into the result map: one `Single` per fixed
    /// argument, one `Multi` for the pack's tail, and one `Multi` per matched
    /// option under both its long and short names.
    fn assemble(&mut self, positionals: Vec<String>, captured: HashMap<String, Vec<String>>) {
        if self.has_pack {
            let base = self.arguments.len() - 1;
            let pack_len = positionals.len() - base;
            let mut tokens = positionals.into_iter();
            for argument in &self.arguments {
                if argument.is_pack {
                    let values: Vec<String> = tokens.by_ref().take(pack_len).collect();
                    self.values
                        .insert(argument.name.clone(), Value::Multi(values));
                } else if let Some(token) = tokens.next() {
                    self.values
                        .insert(argument.name.clone(), Value::Single(token));
                }
            }
        } else {
            for (argument, token) in self.arguments.iter().zip(positionals) {
                self.values
                    .insert(argument.name.clone(), Value::Single(token));
            }
        }

        for (long, values) in captured {
            if let Some(short) = self.options.get(&long).and_then(|o| o.short.clone()) {
                self.values.insert(short, Value::Multi(values.clone()));
            }
            self.values.insert(long, Value::Multi(values));
        }
    }
}

impl std::ops::Index<&str> for CommandParser {
    type Output = Value;

    fn index(&self, name: &str) -> &Value {
        self.values.get(name).unwrap_or(&ABSENT)
    }
}

/// Formats the declared-name/actual-value listing for count-mismatch
/// diagnostics, covering the longer of the two sequences.
fn mismatch_pairs(arguments: &[ArgSpec], positionals: &[String]) -> String {
    let mut out = String::new();
    for i in 0..arguments.len().max(positionals.len()) {
        out.push_str(" <");
        out.push_str(arguments.get(i).map_or(" ", |argument| argument.name.as_str()));
        out.push(':');
        out.push_str(positionals.get(i).map_or(" ", String::as_str));
        out.push('>');
    }
    out
}
