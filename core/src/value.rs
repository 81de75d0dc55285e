//! Tri-state result container with typed accessors.

use std::fmt;

use crate::error::ConversionError;

/// Parsed value of an argument or option.
///
/// Lookup on a parser yields one of three states: `Absent` for names that
/// never matched, `Single` for a positional argument's one token, and `Multi`
/// for a matched option's captured values (or a pack argument's absorbed
/// tail).
///
/// Presence is deliberately asymmetric: a matched option reports present even
/// with zero captured values, while a positional argument bound to an empty
/// string reports absent. This keeps `if parser["--flag"].is_present()`
/// working for arity-0 options.
///
/// # Examples
///
/// ```
/// use argspec_core::Value;
///
/// assert!(!Value::Absent.is_present());
/// assert!(!Value::Single(String::new()).is_present());
/// assert!(Value::Multi(Vec::new()).is_present());
///
/// let lines = Value::Multi(vec!["5".into()]);
/// assert_eq!(lines.to_i64().unwrap(), 5);
/// assert_eq!(lines.get(0).as_str(), Some("5"));
/// assert_eq!(lines.get(1), Value::Absent);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Value {
    /// No data; boolean-false.
    #[default]
    Absent,
    /// One string; boolean-true iff non-empty.
    Single(String),
    /// Ordered list of strings; boolean-true unconditionally.
    Multi(Vec<String>),
}

impl Value {
    /// Boolean presence test (see the type-level asymmetry note).
    pub fn is_present(&self) -> bool {
        match self {
            Value::Absent => false,
            Value::Single(value) => !value.is_empty(),
            Value::Multi(_) => true,
        }
    }

    /// The sole string of a single value, or the first string of a multi
    /// value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Absent => None,
            Value::Single(value) => Some(value),
            Value::Multi(values) => values.first().map(String::as_str),
        }
    }

    /// All sub-values of a multi value; empty for the other states.
    pub fn values(&self) -> &[String] {
        match self {
            Value::Multi(values) => values,
            _ => &[],
        }
    }

    /// Sub-value count of a multi value; 0 for the other states.
    pub fn len(&self) -> usize {
        self.values().len()
    }

    /// Whether the value holds no sub-values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sub-value at `index` of a multi value as a new single value, or
    /// `Absent` when out of range (or not a multi value).
    pub fn get(&self, index: usize) -> Value {
        match self {
            Value::Multi(values) => values
                .get(index)
                .map(|value| Value::Single(value.clone()))
                .unwrap_or_default(),
            _ => Value::Absent,
        }
    }

    /// Converts the first string to `i64`.
    pub fn to_i64(&self) -> Result<i64, ConversionError> {
        self.parse_first("i64")
    }

    /// Converts the first string to `f32`.
    pub fn to_f32(&self) -> Result<f32, ConversionError> {
        self.parse_first("f32")
    }

    /// Converts the first string to `f64`.
    pub fn to_f64(&self) -> Result<f64, ConversionError> {
        self.parse_first("f64")
    }

    fn parse_first<T: std::str::FromStr>(
        &self,
        target: &'static str,
    ) -> Result<T, ConversionError> {
        let value = self.as_str().ok_or(ConversionError::Absent)?;
        value.parse().map_err(|_| ConversionError::NotNumeric {
            value: value.to_string(),
            target,
        })
    }
}

/// Renders the first string; empty for absent values.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_asymmetry() {
        assert!(!Value::Absent.is_present());
        assert!(!Value::Single(String::new()).is_present());
        assert!(Value::Single("x".into()).is_present());
        assert!(Value::Multi(Vec::new()).is_present());
        assert!(Value::Multi(vec!["x".into()]).is_present());
    }

    #[test]
    fn test_conversions_use_first_string() {
        let single = Value::Single("42".into());
        assert_eq!(single.to_i64().unwrap(), 42);

        let multi = Value::Multi(vec!["-7".into(), "99".into()]);
        assert_eq!(multi.to_i64().unwrap(), -7);
        assert_eq!(multi.to_f64().unwrap(), -7.0);
    }

    #[test]
    fn test_conversion_errors_are_structured() {
        assert_eq!(Value::Absent.to_i64(), Err(ConversionError::Absent));
        assert_eq!(
            Value::Multi(Vec::new()).to_i64(),
            Err(ConversionError::Absent)
        );
        assert_eq!(
            Value::Single("five".into()).to_i64(),
            Err(ConversionError::NotNumeric {
                value: "five".into(),
                target: "i64",
            })
        );
    }

    #[test]
    fn test_float_conversion_accepts_decimals() {
        let value = Value::Single("2.5".into());
        assert_eq!(value.to_f32().unwrap(), 2.5);
        assert_eq!(value.to_f64().unwrap(), 2.5);
        assert!(value.to_i64().is_err());
    }

    #[test]
    fn test_indexing_multi_values() {
        let value = Value::Multi(vec!["a".into(), "b".into()]);
        assert_eq!(value.len(), 2);
        assert_eq!(value.get(0), Value::Single("a".into()));
        assert_eq!(value.get(1), Value::Single("b".into()));
        assert_eq!(value.get(2), Value::Absent);

        // Single values expose no indexable sub-values.
        let single = Value::Single("a".into());
        assert_eq!(single.len(), 0);
        assert_eq!(single.get(0), Value::Absent);
    }

    #[test]
    fn test_display_renders_first_string() {
        assert_eq!(Value::Absent.to_string(), "");
        assert_eq!(Value::Single("notes.txt".into()).to_string(), "notes.txt");
        assert_eq!(Value::Multi(vec!["a".into(), "b".into()]).to_string(), "a");
    }
}
