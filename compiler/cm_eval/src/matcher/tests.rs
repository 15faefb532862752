use std::thread;

use super::*;
use crate::guard;
use cm_patterns::MatchErrorKind;
use pretty_assertions::assert_eq;

fn nums(ns: &[i32]) -> Value {
    Value::array(ns.iter().copied().map(Value::from).collect())
}

fn shape_matcher() -> Matcher<&'static str> {
    Matcher::builder()
        .value("[]", "empty")
        .value("[x]", "single")
        .arm(
            "[x, y]",
            guard(
                |bindings: &Bindings, _: &Value| bindings.get("x") == bindings.get("y"),
                Handler::Value("twin"),
            ),
        )
        .value("[x, y]", "pair")
        .value("_", "other")
        .build()
}

#[test]
fn applies_to_many_values() {
    let matcher = shape_matcher();
    assert_eq!(matcher.arms().len(), 5);
    assert_eq!(matcher.apply(&nums(&[])).unwrap(), Some("empty"));
    assert_eq!(matcher.apply(&nums(&[4])).unwrap(), Some("single"));
    assert_eq!(matcher.apply(&nums(&[4, 4])).unwrap(), Some("twin"));
    assert_eq!(matcher.apply(&nums(&[4, 5])).unwrap(), Some("pair"));
    assert_eq!(matcher.apply(&Value::Null).unwrap(), Some("other"));
}

#[test]
fn caches_patterns_it_reaches() {
    let matcher = shape_matcher();
    let cache = matcher.cache().unwrap();
    assert!(cache.is_empty());

    matcher.apply(&nums(&[1])).unwrap();
    assert_eq!(cache.len(), 2);
    assert!(cache.contains("[x]"));
    assert!(!cache.contains("_"));

    matcher.apply(&Value::Null).unwrap();
    assert_eq!(cache.len(), 4);
}

#[test]
fn caching_can_be_disabled() {
    let matcher = Matcher::builder().cache(false).value("x", 1).build();
    assert!(matcher.cache().is_none());
    assert_eq!(matcher.apply(&Value::Null).unwrap(), Some(1));
}

#[test]
fn shared_cache_spans_matchers() {
    let cache = PatternCache::new();
    let first = Matcher::builder()
        .shared_cache(cache.clone())
        .value("{a}", 1)
        .build();
    let second = Matcher::builder()
        .cache(false)
        .shared_cache(cache.clone())
        .value("{b}", 2)
        .build();

    first.apply(&Value::Null).unwrap();
    second.apply(&Value::Null).unwrap();
    assert!(second.cache().unwrap().ptr_eq(&cache));
    assert_eq!(cache.len(), 2);
}

#[test]
fn validate_reports_the_first_bad_pattern() {
    let matcher = Matcher::builder()
        .value("[x]", 1)
        .value("{a, }", 2)
        .value("[", 3)
        .build();
    let error = matcher.validate().unwrap_err();
    let MatchErrorKind::InvalidPattern { pattern, .. } = &error.kind else {
        panic!("expected an invalid pattern error, got {error:?}");
    };
    assert_eq!(pattern, "[");
    assert_eq!(matcher.cache().unwrap().len(), 2);

    assert!(shape_matcher().validate().is_ok());
}

#[test]
fn exhaustive_application() {
    let matcher = Matcher::builder()
        .call("[x, y]", |bindings: &Bindings, _: &Value| bindings.len())
        .build();
    assert_eq!(matcher.apply_exhaustive(&nums(&[1, 2])).unwrap(), 2);
    let error = matcher.apply_exhaustive(&nums(&[1])).unwrap_err();
    assert_eq!(error.kind, MatchErrorKind::NonExhaustive);
    assert_eq!(error.notes, vec!["patterns tried: `[x, y]`".to_string()]);
}

#[test]
fn matcher_is_shareable_across_threads() {
    let matcher = shape_matcher();
    thread::scope(|scope| {
        for n in 0..4 {
            let matcher = &matcher;
            scope.spawn(move || {
                let expected = if n == 1 { "single" } else { "other" };
                let value = if n == 1 { nums(&[n]) } else { Value::from(n) };
                assert_eq!(matcher.apply(&value).unwrap(), Some(expected));
            });
        }
    });
    // `[x, y]` appears twice but is cached once.
    assert_eq!(matcher.cache().unwrap().len(), 4);
}
