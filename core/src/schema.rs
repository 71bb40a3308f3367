//! Schema declaration and validation.
//!
//! A [`Schema`] is an immutable, ordered sequence of [`OptionSpec`]s plus a
//! converter table aligned with declaration order. It grows through a
//! persistent builder: every [`add`](Schema::add) returns a fresh schema and
//! leaves the original untouched, so earlier schemas (and anything already
//! parsed with them) are unaffected.
//!
//! Declaration is validated eagerly: malformed names and names that collide
//! with an already-declared alias are rejected at `add` time rather than
//! surfacing as ambiguous matches later.
//!
//! # Examples
//!
//! ```
//! use declopt_core::Schema;
//!
//! let schema = Schema::new()
//!     .integer("-f", "-first").unwrap()
//!     .float("-s", "-second").unwrap();
//!
//! assert_eq!(schema.len(), 2);
//! assert_eq!(schema.index_of("-s"), Some(1));
//! assert_eq!(schema.index_of("-third"), None);
//!
//! // Duplicate alias → rejected
//! assert!(schema.flag("-f", "-force").is_err());
//! ```

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::convert::{ConvertFn, OptionValue, converter_for};
use crate::types::{OptionSpec, ValueKind};

/// Schema declaration errors.
///
/// Each variant describes a specific problem caught while declaring options
/// or minting typed handles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Option name is malformed (no leading dash, empty, or contains `=`
    /// or whitespace).
    #[error("invalid option name '{name}': {reason}")]
    InvalidName {
        /// The offending name.
        name: String,
        /// What the name violates.
        reason: &'static str,
    },
    /// Short and long form of one declaration are the same string.
    #[error("short and long names must differ, both are '{0}'")]
    AliasesEqual(String),
    /// Name collides with an alias of an already-declared option.
    #[error("duplicate option name '{0}'")]
    DuplicateName(String),
    /// Handle requested for a name not declared in the schema.
    #[error("option '{0}' is not declared in the schema")]
    UnknownOption(String),
    /// Handle requested with a type that disagrees with the declaration.
    #[error("option '{name}' is declared as {declared}, requested {requested}")]
    KindMismatch {
        /// Canonical name of the option.
        name: String,
        /// Kind the schema declares.
        declared: ValueKind,
        /// Kind implied by the requested Rust type.
        requested: ValueKind,
    },
}

/// Immutable, ordered option schema.
///
/// Built once, then shared read-only; [`parse`](crate::parse) may be called
/// against the same schema any number of times, including from multiple
/// threads.
///
/// Serialization goes through the plain descriptor list, so a schema
/// round-trips JSON and re-validates on the way back in.
///
/// # Examples
///
/// ```
/// use declopt_core::Schema;
///
/// let schema = Schema::new()
///     .integer("-f", "-first").unwrap()
///     .flag("-v", "-verbose").unwrap();
///
/// let json = serde_json::to_string(&schema).unwrap();
/// let back: Schema = serde_json::from_str(&json).unwrap();
/// assert_eq!(schema, back);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<OptionSpec>", try_from = "Vec<OptionSpec>")]
pub struct Schema {
    specs: Vec<OptionSpec>,
    converters: Vec<ConvertFn>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one option and returns the grown schema.
    ///
    /// The receiver is unchanged. Names are validated here: both must start
    /// with `-`, name at least one character, and contain no `=` or
    /// whitespace; neither may equal the other or collide with any alias
    /// already declared.
    ///
    /// # Examples
    ///
    /// ```
    /// use declopt_core::{Schema, SchemaError, ValueKind};
    ///
    /// let base = Schema::new().add(ValueKind::Integer, "-f", "-first").unwrap();
    /// let grown = base.add(ValueKind::Flag, "-v", "-verbose").unwrap();
    ///
    /// // Persistent: the base schema is untouched.
    /// assert_eq!(base.len(), 1);
    /// assert_eq!(grown.len(), 2);
    ///
    /// let err = grown.add(ValueKind::Text, "-f", "-file").unwrap_err();
    /// assert_eq!(err, SchemaError::DuplicateName("-f".to_string()));
    /// ```
    pub fn add(&self, kind: ValueKind, short: &str, long: &str) -> Result<Self, SchemaError> {
        validate_name(short)?;
        validate_name(long)?;
        if short == long {
            return Err(SchemaError::AliasesEqual(short.to_string()));
        }
        for name in [short, long] {
            if self.specs.iter().any(|existing| existing.matches(name)) {
                return Err(SchemaError::DuplicateName(name.to_string()));
            }
        }

        let mut next = self.clone();
        next.specs.push(OptionSpec::new(kind, short, long));
        next.converters.push(converter_for(kind));
        Ok(next)
    }

    /// Declares an integer option.
    pub fn integer(&self, short: &str, long: &str) -> Result<Self, SchemaError> {
        self.add(ValueKind::Integer, short, long)
    }

    /// Declares a floating-point option.
    pub fn float(&self, short: &str, long: &str) -> Result<Self, SchemaError> {
        self.add(ValueKind::Float, short, long)
    }

    /// Declares a text option.
    pub fn text(&self, short: &str, long: &str) -> Result<Self, SchemaError> {
        self.add(ValueKind::Text, short, long)
    }

    /// Declares a presence flag.
    pub fn flag(&self, short: &str, long: &str) -> Result<Self, SchemaError> {
        self.add(ValueKind::Flag, short, long)
    }

    /// Number of declared options.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether no options are declared.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// The descriptors in declaration order.
    pub fn specs(&self) -> &[OptionSpec] {
        &self.specs
    }

    /// Position of the first descriptor matching `name` (short or long
    /// form), scanning in declaration order.
    ///
    /// Returns `None` for an unrecognized name; there is no sentinel index.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.specs.iter().position(|spec| spec.matches(name))
    }

    /// The first descriptor matching `name`, if any.
    pub fn resolve(&self, name: &str) -> Option<&OptionSpec> {
        self.index_of(name).map(|index| &self.specs[index])
    }

    /// The converter aligned with the descriptor at `index`.
    pub(crate) fn converter(&self, index: usize) -> ConvertFn {
        self.converters[index]
    }

    /// Mints a typed handle for a declared option.
    ///
    /// The name (either alias) and the requested type are checked once,
    /// here; a lookup through the returned handle can then no longer fail
    /// with a type mismatch.
    ///
    /// # Examples
    ///
    /// ```
    /// use declopt_core::{Schema, SchemaError};
    ///
    /// let schema = Schema::new().integer("-f", "-first").unwrap();
    ///
    /// let first = schema.handle::<i64>("-f").unwrap();
    /// assert_eq!(first.canonical_name(), "-first");
    ///
    /// // Wrong type is caught at declaration time, not at lookup time.
    /// let err = schema.handle::<bool>("-first").unwrap_err();
    /// assert!(matches!(err, SchemaError::KindMismatch { .. }));
    /// ```
    pub fn handle<T: OptionValue>(&self, name: &str) -> Result<OptionHandle<T>, SchemaError> {
        let spec = self
            .resolve(name)
            .ok_or_else(|| SchemaError::UnknownOption(name.to_string()))?;
        if spec.kind != T::KIND {
            return Err(SchemaError::KindMismatch {
                name: spec.canonical_name().to_string(),
                declared: spec.kind,
                requested: T::KIND,
            });
        }
        Ok(OptionHandle {
            canonical: spec.canonical_name().to_string(),
            _value: PhantomData,
        })
    }

    /// Parses a token list against this schema.
    ///
    /// Convenience for [`parse(self, tokens)`](crate::parse).
    pub fn parse<I, S>(&self, tokens: I) -> crate::ParseOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        crate::parse(self, tokens)
    }
}

impl From<Schema> for Vec<OptionSpec> {
    fn from(schema: Schema) -> Self {
        schema.specs
    }
}

impl TryFrom<Vec<OptionSpec>> for Schema {
    type Error = SchemaError;

    fn try_from(specs: Vec<OptionSpec>) -> Result<Self, Self::Error> {
        specs.into_iter().try_fold(Schema::new(), |schema, spec| {
            schema.add(spec.kind, &spec.short, &spec.long)
        })
    }
}

/// Typed handle to one declared option.
///
/// Obtained from [`Schema::handle`], which validates the name and the value
/// type up front. [`ParsedArgs::get`](crate::ParsedArgs::get) takes the
/// handle, so a lookup through it can only fail because the option was not
/// supplied.
#[derive(Debug, Clone)]
pub struct OptionHandle<T> {
    canonical: String,
    _value: PhantomData<fn() -> T>,
}

impl<T> OptionHandle<T> {
    /// The canonical (long-form) key this handle resolves to.
    pub fn canonical_name(&self) -> &str {
        &self.canonical
    }
}

fn validate_name(name: &str) -> Result<(), SchemaError> {
    if !name.starts_with('-') || name.len() < 2 {
        return Err(SchemaError::InvalidName {
            name: name.to_string(),
            reason: "must start with '-' followed by at least one character",
        });
    }
    if name.contains('=') || name.contains(char::is_whitespace) {
        return Err(SchemaError::InvalidName {
            name: name.to_string(),
            reason: "'=' and whitespace are not allowed",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_persistent() {
        let base = Schema::new().integer("-f", "-first").unwrap();
        let grown = base.flag("-v", "-verbose").unwrap();

        assert_eq!(base.len(), 1);
        assert_eq!(grown.len(), 2);
        assert_eq!(base.index_of("-v"), None);
        assert_eq!(grown.index_of("-v"), Some(1));
    }

    #[test]
    fn test_add_rejects_duplicate_alias() {
        let schema = Schema::new().integer("-f", "-first").unwrap();

        let err = schema.text("-f", "-file").unwrap_err();
        assert_eq!(err, SchemaError::DuplicateName("-f".to_string()));

        let err = schema.text("-x", "-first").unwrap_err();
        assert_eq!(err, SchemaError::DuplicateName("-first".to_string()));
    }

    #[test]
    fn test_add_rejects_malformed_names() {
        let schema = Schema::new();

        assert!(matches!(
            schema.integer("f", "-first").unwrap_err(),
            SchemaError::InvalidName { .. }
        ));
        assert!(matches!(
            schema.integer("-", "-first").unwrap_err(),
            SchemaError::InvalidName { .. }
        ));
        assert!(matches!(
            schema.integer("-f", "-first=x").unwrap_err(),
            SchemaError::InvalidName { .. }
        ));
        assert!(matches!(
            schema.integer("-f", "-first name").unwrap_err(),
            SchemaError::InvalidName { .. }
        ));
        assert_eq!(
            schema.integer("-f", "-f").unwrap_err(),
            SchemaError::AliasesEqual("-f".to_string())
        );
    }

    #[test]
    fn test_index_of_scans_in_declaration_order() {
        let schema = Schema::new()
            .integer("-f", "-first")
            .unwrap()
            .float("-s", "-second")
            .unwrap()
            .flag("-v", "-verbose")
            .unwrap();

        assert_eq!(schema.index_of("-first"), Some(0));
        assert_eq!(schema.index_of("-s"), Some(1));
        assert_eq!(schema.index_of("-verbose"), Some(2));
        assert_eq!(schema.index_of("-missing"), None);
    }

    #[test]
    fn test_handle_validates_name_and_kind() {
        let schema = Schema::new().integer("-f", "-first").unwrap();

        let handle = schema.handle::<i64>("-f").unwrap();
        assert_eq!(handle.canonical_name(), "-first");

        assert_eq!(
            schema.handle::<i64>("-z").unwrap_err(),
            SchemaError::UnknownOption("-z".to_string())
        );
        assert_eq!(
            schema.handle::<String>("-f").unwrap_err(),
            SchemaError::KindMismatch {
                name: "-first".to_string(),
                declared: ValueKind::Integer,
                requested: ValueKind::Text,
            }
        );
    }

    #[test]
    fn test_schema_serde_round_trip_revalidates() {
        let schema = Schema::new()
            .integer("-f", "-first")
            .unwrap()
            .text("-n", "-name")
            .unwrap();

        let json = serde_json::to_string(&schema).unwrap();
        let back: Schema = serde_json::from_str(&json).unwrap();
        assert_eq!(schema, back);

        // A descriptor list with colliding aliases fails deserialization.
        let bad = r#"[
            {"short": "-f", "long": "-first", "kind": "Integer"},
            {"short": "-f", "long": "-file", "kind": "Text"}
        ]"#;
        assert!(serde_json::from_str::<Schema>(bad).is_err());
    }
}
