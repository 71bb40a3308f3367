//! Demonstration entry point for the declopt engine.
//!
//! Declares one example schema, parses the process argument list with it,
//! and prints every supplied option in declaration order. Diagnostics go to
//! stderr, one line each. Exit codes: 0 on a clean parse, 2 when one or
//! more parse errors occurred, 1 for internal failures.

use std::process::ExitCode;

use declopt_core::{ParsedValue, Schema, SchemaError};

/// The example schema: an integer, a float, a text option, and a flag.
fn demo_schema() -> Result<Schema, SchemaError> {
    Schema::new()
        .integer("-f", "-first")?
        .float("-s", "-second")?
        .text("-n", "-name")?
        .flag("-v", "-verbose")
}

fn value_to_json(value: &ParsedValue) -> serde_json::Value {
    match value {
        ParsedValue::Integer(n) => serde_json::json!(n),
        ParsedValue::Float(x) => serde_json::json!(x),
        ParsedValue::Text(s) => serde_json::json!(s),
        ParsedValue::Flag(b) => serde_json::json!(b),
    }
}

fn run(tokens: &[String]) -> Result<u8, String> {
    let (as_json, tokens) = match tokens.split_first() {
        Some((first, rest)) if first.as_str() == "--json" => (true, rest),
        _ => (false, tokens),
    };

    let schema = demo_schema().map_err(|err| err.to_string())?;
    let outcome = schema.parse(tokens);

    for diagnostic in &outcome.diagnostics {
        eprintln!("error: {diagnostic}");
    }

    if as_json {
        let mut map = serde_json::Map::new();
        for spec in schema.specs() {
            if let Some(value) = outcome.args.value(spec.canonical_name()) {
                map.insert(spec.canonical_name().to_string(), value_to_json(value));
            }
        }
        let rendered = serde_json::to_string_pretty(&serde_json::Value::Object(map))
            .map_err(|err| err.to_string())?;
        println!("{rendered}");
    } else {
        // Declaration order, supplied options only.
        for spec in schema.specs() {
            if let Some(value) = outcome.args.value(spec.canonical_name()) {
                println!("{} = {value}", spec.canonical_name());
            }
        }
    }

    Ok(if outcome.is_clean() { 0 } else { 2 })
}

fn main() -> ExitCode {
    let tokens: Vec<String> = std::env::args().skip(1).collect();
    match run(&tokens) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}
