//! Option descriptor types.
//!
//! This module defines the data model for declared options: the closed
//! [`ValueKind`] tag selecting a conversion rule, and the [`OptionSpec`]
//! descriptor pairing a short and long name with a kind. Both types derive
//! [`serde`] traits so schemas can round-trip through JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Value kind for a declared option.
///
/// The kind selects which conversion rule applies to the option's value
/// during parsing. The set is closed: every stored
/// [`ParsedValue`](crate::ParsedValue) carries exactly one of these tags.
///
/// # Examples
///
/// ```
/// use declopt_core::ValueKind;
///
/// assert_eq!(ValueKind::Integer.name(), "integer");
/// assert_eq!(ValueKind::Flag.to_string(), "flag");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    /// Signed integer value (`-count=3`).
    Integer,
    /// Floating-point value (`-ratio=0.5`).
    Float,
    /// Raw text value (`-name=alice`).
    Text,
    /// Presence flag; takes no value and is `true` when supplied.
    Flag,
}

impl ValueKind {
    /// Returns the lowercase human-readable name of the kind.
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
            ValueKind::Flag => "flag",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Descriptor for one declared option.
///
/// An option always has both a short form (e.g., `-f`) and a long form
/// (e.g., `-first`). Matching is case-sensitive and exact: no prefixing, no
/// abbreviation. Declaration order in a [`Schema`](crate::Schema) is
/// significant, since tokens resolve to the first descriptor that matches.
///
/// # Examples
///
/// ```
/// use declopt_core::{OptionSpec, ValueKind};
///
/// let spec = OptionSpec::new(ValueKind::Integer, "-f", "-first");
/// assert!(spec.matches("-f"));
/// assert!(spec.matches("-first"));
/// assert!(!spec.matches("-fir"));
/// assert_eq!(spec.canonical_name(), "-first");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSpec {
    /// Short form (e.g., "-f").
    pub short: String,
    /// Long form (e.g., "-first").
    pub long: String,
    /// Kind of value this option accepts.
    pub kind: ValueKind,
}

impl OptionSpec {
    /// Creates a descriptor from a kind and its two names.
    pub fn new(kind: ValueKind, short: &str, long: &str) -> Self {
        Self {
            short: short.to_string(),
            long: long.to_string(),
            kind,
        }
    }

    /// Returns the canonical name: always the long form.
    ///
    /// Parsed values are stored under this key regardless of which alias
    /// appeared on the command line.
    pub fn canonical_name(&self) -> &str {
        &self.long
    }

    /// Checks if this descriptor matches a name (short or long form).
    ///
    /// # Examples
    ///
    /// ```
    /// use declopt_core::{OptionSpec, ValueKind};
    ///
    /// let spec = OptionSpec::new(ValueKind::Flag, "-v", "-verbose");
    /// assert!(spec.matches("-v"));
    /// assert!(!spec.matches("-V"));
    /// ```
    pub fn matches(&self, name: &str) -> bool {
        self.short == name || self.long == name
    }
}
