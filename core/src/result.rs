//! Typed lookup over a parse result.
//!
//! [`ParsedArgs`] maps canonical option keys to converted values. It keeps
//! the schema it was parsed against so lookups by either alias canonicalize
//! to the same entry. All accessors return explicit [`AccessError`] values
//! rather than panicking.

use std::collections::HashMap;

use thiserror::Error;

use crate::convert::{OptionValue, ParsedValue};
use crate::schema::{OptionHandle, Schema};
use crate::types::ValueKind;

/// Lookup-time errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// Requested name is not declared in the schema at all.
    #[error("option '{0}' is not declared in the schema")]
    UnknownOption(String),
    /// Option is declared but was never supplied in the parsed input.
    #[error("option '{0}' was not supplied")]
    MissingOption(String),
    /// Stored value's tag disagrees with the requested type.
    #[error("option '{name}' holds a {stored} value, requested {requested}")]
    TypeMismatch {
        /// Canonical name of the option.
        name: String,
        /// Tag of the stored value.
        stored: ValueKind,
        /// Kind implied by the requested Rust type.
        requested: ValueKind,
    },
}

/// Immutable result of one parse call.
///
/// Contains an entry only for options that actually appeared in the input;
/// absent options are absent entries, not defaults. Entries are keyed by the
/// canonical (long-form) name, and every accessor takes either alias.
///
/// # Examples
///
/// ```
/// use declopt_core::Schema;
///
/// let schema = Schema::new()
///     .integer("-f", "-first").unwrap()
///     .flag("-v", "-verbose").unwrap();
/// let args = schema.parse(["-f=2"]).into_result().unwrap();
///
/// // Either alias reaches the same stored value.
/// assert_eq!(args.integer("-f").unwrap(), 2);
/// assert_eq!(args.integer("-first").unwrap(), 2);
///
/// // The flag was not supplied, so it has no entry.
/// assert!(!args.is_set("-verbose"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedArgs {
    schema: Schema,
    values: HashMap<String, ParsedValue>,
}

impl ParsedArgs {
    pub(crate) fn new(schema: Schema, values: HashMap<String, ParsedValue>) -> Self {
        Self { schema, values }
    }

    /// Number of options that were supplied.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no options were supplied.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(canonical key, value)` entries.
    ///
    /// Iteration order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParsedValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// The stored value for `name` (either alias), if the option was
    /// supplied.
    ///
    /// Returns `None` both for an undeclared name and for a declared option
    /// that was not supplied; use the typed accessors to tell the two apart.
    pub fn value(&self, name: &str) -> Option<&ParsedValue> {
        let spec = self.schema.resolve(name)?;
        self.values.get(spec.canonical_name())
    }

    /// Whether the option was supplied at all.
    pub fn is_set(&self, name: &str) -> bool {
        self.value(name).is_some()
    }

    /// Retrieves the value for `name` as `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use declopt_core::{AccessError, Schema, ValueKind};
    ///
    /// let schema = Schema::new().integer("-f", "-first").unwrap();
    /// let args = schema.parse(["-f=2"]).into_result().unwrap();
    ///
    /// assert_eq!(args.get_as::<i64>("-f").unwrap(), 2);
    /// assert_eq!(
    ///     args.get_as::<String>("-f").unwrap_err(),
    ///     AccessError::TypeMismatch {
    ///         name: "-first".to_string(),
    ///         stored: ValueKind::Integer,
    ///         requested: ValueKind::Text,
    ///     }
    /// );
    /// ```
    pub fn get_as<T: OptionValue>(&self, name: &str) -> Result<T, AccessError> {
        let spec = self
            .schema
            .resolve(name)
            .ok_or_else(|| AccessError::UnknownOption(name.to_string()))?;
        let canonical = spec.canonical_name();
        let value = self
            .values
            .get(canonical)
            .ok_or_else(|| AccessError::MissingOption(canonical.to_string()))?;
        T::from_parsed(value).ok_or_else(|| AccessError::TypeMismatch {
            name: canonical.to_string(),
            stored: value.kind(),
            requested: T::KIND,
        })
    }

    /// Retrieves an integer option by name.
    pub fn integer(&self, name: &str) -> Result<i64, AccessError> {
        self.get_as(name)
    }

    /// Retrieves a floating-point option by name.
    pub fn float(&self, name: &str) -> Result<f64, AccessError> {
        self.get_as(name)
    }

    /// Retrieves a text option by name.
    pub fn text(&self, name: &str) -> Result<String, AccessError> {
        self.get_as(name)
    }

    /// Retrieves a flag by name; `Ok(true)` if it was supplied.
    ///
    /// A flag that was not supplied is an [`AccessError::MissingOption`],
    /// not `false` — absence encodes "not given". Use
    /// [`is_set`](ParsedArgs::is_set) for a plain presence test.
    pub fn flag(&self, name: &str) -> Result<bool, AccessError> {
        self.get_as(name)
    }

    /// Retrieves the value behind a typed handle.
    ///
    /// The handle's name and type were validated when it was minted, so the
    /// only possible failure is [`AccessError::MissingOption`].
    ///
    /// # Examples
    ///
    /// ```
    /// use declopt_core::Schema;
    ///
    /// let schema = Schema::new().float("-s", "-second").unwrap();
    /// let second = schema.handle::<f64>("-s").unwrap();
    ///
    /// let args = schema.parse(["-second=3.14"]).into_result().unwrap();
    /// assert_eq!(args.get(&second).unwrap(), 3.14);
    /// ```
    pub fn get<T: OptionValue>(&self, handle: &OptionHandle<T>) -> Result<T, AccessError> {
        let canonical = handle.canonical_name();
        let value = self
            .values
            .get(canonical)
            .ok_or_else(|| AccessError::MissingOption(canonical.to_string()))?;
        T::from_parsed(value).ok_or_else(|| AccessError::TypeMismatch {
            name: canonical.to_string(),
            stored: value.kind(),
            requested: T::KIND,
        })
    }
}
