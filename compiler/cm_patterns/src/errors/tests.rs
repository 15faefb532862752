use std::error::Error as _;

use super::*;
use crate::CaseClass;
use cm_parse::{parse_pattern, ParseErrorKind};
use pretty_assertions::assert_eq;

fn unclosed_array() -> ParseError {
    parse_pattern("[a, b").unwrap_err()
}

#[test]
fn codes_follow_kinds() {
    assert_eq!(
        invalid_pattern("[a, b", unclosed_array()).code(),
        ErrorCode::E3001
    );
    assert_eq!(not_case_class("Date").code(), ErrorCode::E3002);
    assert_eq!(non_exhaustive_match(&Value::Null).code(), ErrorCode::E3003);
}

#[test]
fn messages() {
    let error = invalid_pattern("[a, b", unclosed_array());
    assert_eq!(
        error.to_string(),
        "invalid pattern `[a, b`: unclosed `[`: expected `]` before end of pattern"
    );
    assert_eq!(
        not_case_class("Date").to_string(),
        "`Date` value was not built by a case class and has no constructor arguments"
    );

    let pair = CaseClass::with_fields("Pair", &["a", "b"]);
    let value = pair.call(&[Value::from(1), Value::from("x")]);
    assert_eq!(
        non_exhaustive_match(&value).to_string(),
        r#"non-exhaustive match: no arm matched Pair(1, "x")"#
    );
}

#[test]
fn source_is_the_parse_error() {
    let parse = unclosed_array();
    let error = invalid_pattern("[a, b", parse.clone());
    let source = error.source().unwrap().to_string();
    assert_eq!(source, parse.to_string());
    assert!(not_case_class("Date").source().is_none());
    assert!(non_exhaustive_match(&Value::Null).source().is_none());
}

#[test]
fn invalid_pattern_diagnostic_carries_parse_labels() {
    let parse = unclosed_array();
    assert!(matches!(parse.kind, ParseErrorKind::Unclosed { .. }));
    let diag = invalid_pattern("[a, b", parse.clone()).to_diagnostic();

    assert_eq!(diag.code, ErrorCode::E3001);
    assert_eq!(diag.labels, parse.to_diagnostic().labels);
    assert_eq!(
        diag.notes,
        vec!["[E1003] unclosed `[`: expected `]` before end of pattern".to_string()]
    );
    assert_eq!(diag.suggestions, vec!["add `]`".to_string()]);
}

#[test]
fn other_diagnostics_suggest_fixes() {
    let diag = not_case_class("Date").to_diagnostic();
    assert_eq!(
        diag.suggestions,
        vec!["match its properties with `Date({...})` instead".to_string()]
    );
    assert!(diag.labels.is_empty());

    let diag = non_exhaustive_match(&Value::from(3))
        .with_note("3 arms tried")
        .to_diagnostic();
    assert_eq!(diag.message, "non-exhaustive match: no arm matched 3");
    assert_eq!(diag.suggestions, vec!["add a final `_` arm".to_string()]);
    assert_eq!(diag.notes, vec!["3 arms tried".to_string()]);
}
