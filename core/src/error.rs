//! Error types for registration, parsing, and value conversion.
//!
//! Three tiers with different severities: [`RegistrationError`] is non-fatal
//! (the caller decides whether a rejected definition matters),
//! [`ParseError`] ends the parse (a malformed invocation cannot produce a
//! meaningful partial result), and [`ConversionError`] surfaces typed-access
//! failures on values that were never declared numeric-only.
//!
//! All variants carry the offending name or token so tests can assert on
//! error identity rather than message text.

use thiserror::Error;

/// Rejected argument or option registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Argument name is empty, too long, or violates the identifier rule.
    #[error("invalid argument name: {0}")]
    InvalidArgumentName(String),

    /// An argument with this name is already registered.
    #[error("duplicate argument name: {0}")]
    DuplicateArgument(String),

    /// A pack argument is already registered; carries the existing pack's name.
    #[error("argument pack already registered: {0}")]
    PackAlreadyRegistered(String),

    /// Long name does not start with `--`, is too long, or its stem violates
    /// the identifier rule.
    #[error("invalid option name: {0}")]
    InvalidOptionName(String),

    /// An option with this long name is already registered.
    #[error("duplicate option name: {0}")]
    DuplicateOption(String),

    /// Short name does not start with `-`, is too long, or its stem violates
    /// the identifier rule.
    #[error("invalid option short name: {0}")]
    InvalidShortName(String),

    /// Another option already claims this short name.
    #[error("duplicate option short name: {0}")]
    DuplicateShortName(String),
}

/// Fatal classification or validation failure during a parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The argument vector held no invocation path at all.
    #[error("argument vector is empty")]
    EmptyArgumentVector,

    /// Fewer tokens followed an option than its declared arity.
    #[error("option [{option}] expects {expected} value(s), got {actual}")]
    MissingOptionValues {
        option: String,
        expected: usize,
        actual: usize,
    },

    /// A numeric-only option consumed a token that is not an integer.
    #[error("option [{option}] requires a numeric value, got '{value}'")]
    NonNumericOptionValue { option: String, value: String },

    /// A numeric-only argument was bound to a token that is not an integer.
    #[error("argument <{argument}> requires a numeric value, got '{value}'")]
    NonNumericArgument { argument: String, value: String },

    /// A numeric-only pack absorbed a token that is not an integer.
    #[error("argument pack <{pack}> requires numeric values, got '{value}'")]
    NonNumericPackValue { pack: String, value: String },

    /// Positional token count differs from the registered argument count
    /// (no pack registered). `pairs` lists each declared-name/actual-value
    /// pair up to the longer of the two counts.
    #[error("argument count must be {expected}, got {actual}, they are:{pairs}")]
    ArgumentCountMismatch {
        expected: usize,
        actual: usize,
        pairs: String,
    },

    /// Fewer positional tokens than the fixed (non-pack) argument count.
    #[error("at least {minimum} argument(s) required, got {actual}")]
    InsufficientArguments { minimum: usize, actual: usize },

    /// No positional token was left over for the pack to absorb.
    #[error("argument pack <{pack}> requires at least one value")]
    EmptyArgumentPack { pack: String },
}

/// Failed typed extraction from a [`Value`](crate::Value).
///
/// Numeric-only fields are pre-validated at parse time, so this is only
/// reachable through fields that were not declared numeric-only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The value is absent or holds no string to convert.
    #[error("value is absent")]
    Absent,

    /// The value's content does not parse as the requested type.
    #[error("cannot convert '{value}' to {target}")]
    NotNumeric { value: String, target: &'static str },
}
