use std::process::{Command, Output};

fn run_declopt(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_declopt"))
        .args(args)
        .output()
        .expect("failed to run declopt binary")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ---------------------------------------------------------------------------
// Clean parses
// ---------------------------------------------------------------------------

#[test]
fn clean_parse_prints_values_and_exits_zero() {
    let output = run_declopt(&["-first=2", "-s=3.14"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("-first = 2"), "stdout was: {stdout}");
    assert!(stdout.contains("-second = 3.14"), "stdout was: {stdout}");
    assert!(stderr_of(&output).is_empty());
}

#[test]
fn values_print_under_canonical_name_whichever_alias_was_typed() {
    let output = run_declopt(&["-f=7", "-v"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("-first = 7"), "stdout was: {stdout}");
    assert!(stdout.contains("-verbose = true"), "stdout was: {stdout}");
}

#[test]
fn absent_options_are_not_printed() {
    let output = run_declopt(&["-n=alice"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("-name = alice"), "stdout was: {stdout}");
    assert!(!stdout.contains("-verbose"), "stdout was: {stdout}");
    assert!(!stdout.contains("-first"), "stdout was: {stdout}");
}

#[test]
fn no_arguments_is_a_clean_empty_parse() {
    let output = run_declopt(&[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output).is_empty());
}

// ---------------------------------------------------------------------------
// Diagnostics and exit codes
// ---------------------------------------------------------------------------

#[test]
fn unknown_option_goes_to_stderr_and_exits_two() {
    let output = run_declopt(&["-z=1"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("'-z' not recognized"), "stderr was: {stderr}");
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn invalid_value_reports_the_option_and_exits_two() {
    let output = run_declopt(&["-first=abc"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("-first"), "stderr was: {stderr}");
    assert!(stderr.contains("invalid value 'abc'"), "stderr was: {stderr}");
}

#[test]
fn good_tokens_still_print_when_a_bad_token_is_skipped() {
    let output = run_declopt(&["-f=2", "-z"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout_of(&output).contains("-first = 2"));
    assert!(stderr_of(&output).contains("not recognized"));
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

#[test]
fn json_dump_uses_canonical_keys_and_plain_values() {
    let output = run_declopt(&["--json", "-f=2", "-s=3.14", "-v"]);

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("stdout is not valid JSON");

    assert_eq!(value["-first"], serde_json::json!(2));
    assert_eq!(value["-second"], serde_json::json!(3.14));
    assert_eq!(value["-verbose"], serde_json::json!(true));
    assert!(value.get("-name").is_none());
}
