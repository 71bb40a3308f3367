//! Value conversion.
//!
//! Each [`ValueKind`] has one converter function mapping the raw value
//! substring of a token to a [`ParsedValue`]. The converters are collected
//! into a table aligned with schema declaration order, so the parser engine
//! dispatches purely by position. Conversion failures surface as
//! [`ParseError`](crate::ParseError) values instead of being logged and
//! ignored.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parse::ParseError;
use crate::types::{OptionSpec, ValueKind};

/// A converted option value, tagged with its kind.
///
/// Exactly one variant per [`ValueKind`]. The tag always agrees with the
/// declared kind of the option the value was parsed for.
///
/// # Examples
///
/// ```
/// use declopt_core::{ParsedValue, ValueKind};
///
/// let value = ParsedValue::Integer(2);
/// assert_eq!(value.kind(), ValueKind::Integer);
/// assert_eq!(value.to_string(), "2");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParsedValue {
    /// Converted integer value.
    Integer(i64),
    /// Converted floating-point value.
    Float(f64),
    /// Raw text value (everything after the first `=`).
    Text(String),
    /// Flag presence; always `true` in a parse result.
    Flag(bool),
}

impl ParsedValue {
    /// Returns the kind tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            ParsedValue::Integer(_) => ValueKind::Integer,
            ParsedValue::Float(_) => ValueKind::Float,
            ParsedValue::Text(_) => ValueKind::Text,
            ParsedValue::Flag(_) => ValueKind::Flag,
        }
    }
}

impl fmt::Display for ParsedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedValue::Integer(n) => write!(f, "{n}"),
            ParsedValue::Float(x) => write!(f, "{x}"),
            ParsedValue::Text(s) => f.write_str(s),
            ParsedValue::Flag(b) => write!(f, "{b}"),
        }
    }
}

/// Rust types that can be declared and retrieved as option values.
///
/// Maps a concrete Rust type to its [`ValueKind`] tag and extracts it from a
/// stored [`ParsedValue`]. Implemented for `i64` (Integer), `f64` (Float),
/// `String` (Text), and `bool` (Flag). Typed handles and the typed accessors
/// on [`ParsedArgs`](crate::ParsedArgs) are generic over this trait.
///
/// # Examples
///
/// ```
/// use declopt_core::{OptionValue, ParsedValue, ValueKind};
///
/// assert_eq!(<i64 as OptionValue>::KIND, ValueKind::Integer);
/// assert_eq!(i64::from_parsed(&ParsedValue::Integer(7)), Some(7));
/// assert_eq!(i64::from_parsed(&ParsedValue::Flag(true)), None);
/// ```
pub trait OptionValue: Sized {
    /// The kind tag this type corresponds to.
    const KIND: ValueKind;

    /// Extracts a value of this type, or `None` if the tag disagrees.
    fn from_parsed(value: &ParsedValue) -> Option<Self>;
}

impl OptionValue for i64 {
    const KIND: ValueKind = ValueKind::Integer;

    fn from_parsed(value: &ParsedValue) -> Option<Self> {
        match value {
            ParsedValue::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl OptionValue for f64 {
    const KIND: ValueKind = ValueKind::Float;

    fn from_parsed(value: &ParsedValue) -> Option<Self> {
        match value {
            ParsedValue::Float(x) => Some(*x),
            _ => None,
        }
    }
}

impl OptionValue for String {
    const KIND: ValueKind = ValueKind::Text;

    fn from_parsed(value: &ParsedValue) -> Option<Self> {
        match value {
            ParsedValue::Text(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl OptionValue for bool {
    const KIND: ValueKind = ValueKind::Flag;

    fn from_parsed(value: &ParsedValue) -> Option<Self> {
        match value {
            ParsedValue::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

/// Converter signature: descriptor plus the optional `=value` substring.
pub(crate) type ConvertFn = fn(&OptionSpec, Option<&str>) -> Result<ParsedValue, ParseError>;

/// Returns the converter function for a kind.
pub(crate) fn converter_for(kind: ValueKind) -> ConvertFn {
    match kind {
        ValueKind::Integer => convert_integer,
        ValueKind::Float => convert_float,
        ValueKind::Text => convert_text,
        ValueKind::Flag => convert_flag,
    }
}

fn convert_flag(_spec: &OptionSpec, _value: Option<&str>) -> Result<ParsedValue, ParseError> {
    // Presence is the whole signal; an `=value` suffix is ignored.
    Ok(ParsedValue::Flag(true))
}

fn convert_text(spec: &OptionSpec, value: Option<&str>) -> Result<ParsedValue, ParseError> {
    match value {
        Some(raw) => Ok(ParsedValue::Text(raw.to_string())),
        None => Err(ParseError::MissingValue {
            name: spec.canonical_name().to_string(),
            kind: spec.kind,
        }),
    }
}

fn convert_integer(spec: &OptionSpec, value: Option<&str>) -> Result<ParsedValue, ParseError> {
    let raw = value.ok_or_else(|| ParseError::MissingValue {
        name: spec.canonical_name().to_string(),
        kind: spec.kind,
    })?;
    raw.parse::<i64>()
        .map(ParsedValue::Integer)
        .map_err(|err| ParseError::InvalidValue {
            name: spec.canonical_name().to_string(),
            value: raw.to_string(),
            reason: err.to_string(),
        })
}

fn convert_float(spec: &OptionSpec, value: Option<&str>) -> Result<ParsedValue, ParseError> {
    let raw = value.ok_or_else(|| ParseError::MissingValue {
        name: spec.canonical_name().to_string(),
        kind: spec.kind,
    })?;
    raw.parse::<f64>()
        .map(ParsedValue::Float)
        .map_err(|err| ParseError::InvalidValue {
            name: spec.canonical_name().to_string(),
            value: raw.to_string(),
            reason: err.to_string(),
        })
}
