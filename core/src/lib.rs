//! Declarative typed option schemas and the parsing engine behind them.
//!
//! Callers declare a schema of named, typed options through a fluent,
//! persistent builder, then parse raw argument tokens into an immutable
//! lookup object with typed retrieval:
//!
//! - [`Schema`] — immutable, ordered declaration of all recognized options;
//!   every [`add`](Schema::add) returns a new schema.
//! - [`OptionSpec`] / [`ValueKind`] — the descriptor for one option and its
//!   closed set of value kinds (integer, float, text, flag).
//! - [`parse`] — resolves each `name` or `name=value` token against the
//!   schema, converts its value, and collects diagnostics for tokens that
//!   fail, without aborting.
//! - [`ParsedArgs`] — the result map, keyed canonically by long form,
//!   queried by either alias or through a typed [`OptionHandle`].
//!
//! Every failure mode is an explicit error value: [`SchemaError`] at
//! declaration time, [`ParseError`] per bad token, [`AccessError`] at
//! lookup time. Nothing panics and nothing is silently skipped.
//!
//! # Example
//!
//! ```
//! use declopt_core::Schema;
//!
//! let schema = Schema::new()
//!     .integer("-f", "-first").unwrap()
//!     .float("-s", "-second").unwrap()
//!     .flag("-v", "-verbose").unwrap();
//!
//! let args = schema.parse(["-first=2", "-s=3.14"]).into_result().unwrap();
//!
//! assert_eq!(args.integer("-f").unwrap(), 2);
//! assert_eq!(args.float("-s").unwrap(), 3.14);
//! assert!(!args.is_set("-verbose"));
//! ```

mod convert;
mod parse;
mod result;
mod schema;
mod types;

pub use convert::{OptionValue, ParsedValue};
pub use parse::{ParseError, ParseOutcome, parse, split_token};
pub use result::{AccessError, ParsedArgs};
pub use schema::{OptionHandle, Schema, SchemaError};
pub use types::{OptionSpec, ValueKind};
