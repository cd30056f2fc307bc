//! Tests for reading `OutputArgs` with sarge.

use sarge::ArgumentType;

use crate::cli::OutputArgs;

#[test]
fn comma_separated_tokens_are_split_and_trimmed() {
    let args = match OutputArgs::from_value(Some("table, json=out.json,,")) {
        Some(Ok(args)) => args,
        _ => panic!("expected parsed output args"),
    };
    assert_eq!(args.as_slice(), ["table", "json=out.json"]);
}

#[test]
fn missing_value_yields_no_tokens() {
    let args = match OutputArgs::from_value(None) {
        Some(Ok(args)) => args,
        _ => panic!("expected parsed output args"),
    };
    assert!(args.is_empty());
}

#[test]
fn default_value_is_empty_args() {
    assert_eq!(OutputArgs::default_value(), Some(OutputArgs::default()));
}
