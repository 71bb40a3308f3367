//! The parser engine.
//!
//! [`parse`] consumes a [`Schema`] and a list of raw tokens and produces a
//! [`ParseOutcome`]: the [`ParsedArgs`] built from every token that resolved
//! and converted cleanly, plus one [`ParseError`] diagnostic per token that
//! did not. Bad tokens are skipped, never half-converted — a caller that
//! wants to abort on the first problem uses
//! [`ParseOutcome::into_result`].
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
//! let args = schema.parse(["-first=2", "-s=3.14"]).into_result().unwrap();
//! assert_eq!(args.integer("-f").unwrap(), 2);
//! assert_eq!(args.float("-s").unwrap(), 3.14);
//! ```

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, warn};

use crate::result::ParsedArgs;
use crate::schema::Schema;
use crate::types::ValueKind;

/// Parse-time diagnostics.
///
/// One diagnostic is produced per token that fails to resolve or convert;
/// the token contributes no entry to the result and parsing continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Token name does not match any declared option.
    #[error("option '{0}' not recognized")]
    UnknownOption(String),
    /// Option requires a value but the token has no `=` part.
    #[error("option '{name}' expects a {kind} value, none was supplied")]
    MissingValue {
        /// Canonical name of the option.
        name: String,
        /// Kind the option was declared with.
        kind: ValueKind,
    },
    /// Value substring failed type conversion.
    #[error("option '{name}' provided invalid value '{value}': {reason}")]
    InvalidValue {
        /// Canonical name of the option.
        name: String,
        /// The raw value substring.
        value: String,
        /// Why conversion failed.
        reason: String,
    },
}

/// Result of one parse call: the assembled arguments plus diagnostics.
///
/// The shape keeps soft failures recoverable: the arguments hold every
/// token that parsed cleanly, and `diagnostics` records the rest in input
/// order. The caller picks the policy — inspect and continue, or treat any
/// diagnostic as fatal via [`into_result`](ParseOutcome::into_result).
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    /// Values for the options that were supplied and converted.
    pub args: ParsedArgs,
    /// One entry per token that failed to resolve or convert.
    pub diagnostics: Vec<ParseError>,
}

impl ParseOutcome {
    /// Whether every token parsed cleanly.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Converts to a strict result: the arguments if clean, otherwise the
    /// first diagnostic.
    pub fn into_result(self) -> Result<ParsedArgs, ParseError> {
        match self.diagnostics.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.args),
        }
    }
}

/// Splits a raw token at the first `=` into a name part and an optional
/// value part.
///
/// No shell-style quoting or escaping is interpreted; a second `=` belongs
/// to the value.
///
/// # Examples
///
/// ```
/// use declopt_core::split_token;
///
/// assert_eq!(split_token("-first=2"), ("-first", Some("2")));
/// assert_eq!(split_token("-verbose"), ("-verbose", None));
/// assert_eq!(split_token("-name=a=b"), ("-name", Some("a=b")));
/// assert_eq!(split_token("-name="), ("-name", Some("")));
/// ```
pub fn split_token(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (token, None),
    }
}

/// Parses raw tokens against a schema.
///
/// Each token is taken verbatim (no re-splitting), split at the first `=`,
/// and resolved to the first matching descriptor in declaration order.
/// Successful conversions are stored under the option's canonical (long)
/// key, whichever alias the token used; supplying the same option again
/// overwrites the earlier value (last-write-wins). Tokens that fail to
/// resolve or convert are recorded as diagnostics and skipped.
///
/// # Examples
///
/// ```
/// use declopt_core::{ParseError, Schema};
///
/// let schema = Schema::new().integer("-f", "-first").unwrap();
///
/// let outcome = declopt_core::parse(&schema, ["-f=1", "-z=9"]);
/// assert_eq!(outcome.args.integer("-first").unwrap(), 1);
/// assert_eq!(
///     outcome.diagnostics,
///     vec![ParseError::UnknownOption("-z".to_string())]
/// );
/// ```
pub fn parse<I, S>(schema: &Schema, tokens: I) -> ParseOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut values: HashMap<String, crate::ParsedValue> = HashMap::new();
    let mut diagnostics = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        let (name, value) = split_token(token);

        let Some(index) = schema.index_of(name) else {
            warn!(token, "unknown option");
            diagnostics.push(ParseError::UnknownOption(name.to_string()));
            continue;
        };

        let spec = &schema.specs()[index];
        match schema.converter(index)(spec, value) {
            Ok(parsed) => {
                debug!(token, canonical = spec.canonical_name(), "token matched");
                values.insert(spec.canonical_name().to_string(), parsed);
            }
            Err(err) => {
                warn!(token, %err, "value conversion failed");
                diagnostics.push(err);
            }
        }
    }

    ParseOutcome {
        args: ParsedArgs::new(schema.clone(), values),
        diagnostics,
    }
}
