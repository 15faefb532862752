#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

//! Errors surfaced by dispatch, and their rendered diagnostics.

use std::error::Error as _;

use casematch::{
    dispatch_match, parse_pattern, render, Arm, ColorMode, ErrorCode, MatchErrorKind,
    ParseErrorKind, TerminalEmitter, Value,
};
use pretty_assertions::assert_eq;

#[test]
fn invalid_pattern_renders_against_its_text() {
    let arms = [Arm::value("[x, y", ()), Arm::value("_", ())];
    let error = dispatch_match(&Value::Null, &arms).unwrap_err();
    assert_eq!(error.code(), ErrorCode::E3001);

    let MatchErrorKind::InvalidPattern { pattern, .. } = &error.kind else {
        panic!("expected an invalid pattern error, got {error:?}");
    };
    assert_eq!(
        render(&error.to_diagnostic(), pattern),
        "error [E3001]: invalid pattern `[x, y`: unclosed `[`: expected `]` before end of pattern\n\
         \x20 | [x, y\n\
         \x20 |      ^ while parsing an array pattern\n\
         \x20 | [x, y\n\
         \x20 | - `[` opened here\n\
         \x20 = note: [E1003] unclosed `[`: expected `]` before end of pattern\n\
         \x20 = help: add `]`\n"
    );
}

#[test]
fn parse_errors_are_reported_on_every_dispatch() {
    let arms = [Arm::value("{_}", 0)];
    for _ in 0..2 {
        let error = dispatch_match(&Value::Null, &arms).unwrap_err();
        let source = error.source().unwrap().to_string();
        assert_eq!(
            source,
            "`_` cannot be bound as an object key at 1..2 (remaining input: `_}`)"
        );
    }
}

#[test]
fn parse_error_carries_remainder() {
    let error = parse_pattern("[a, b] c").unwrap_err();
    assert_eq!(error.kind, ParseErrorKind::TrailingInput);
    assert_eq!(error.remainder, "c");
}

#[test]
fn not_case_class_renders_a_fix() {
    let date = Value::tagged_object("Date", [("time", Value::from(0))]);
    let error = dispatch_match(&date, &[Arm::value("Date([t])", ())]).unwrap_err();

    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, true);
    emitter.emit(&error.to_diagnostic(), "Date([t])").unwrap();
    assert_eq!(
        String::from_utf8(emitter.into_inner()).unwrap(),
        "error [E3002]: `Date` value was not built by a case class and has no constructor arguments\n\
         \x20 = help: match its properties with `Date({...})` instead\n"
    );
}
