use super::*;
use pretty_assertions::assert_eq;

#[test]
fn keeps_capture_order() {
    let mut bindings = Bindings::new();
    bindings.insert("b", Value::from(1));
    bindings.insert("a", Value::from(2));
    assert_eq!(bindings.names().collect::<Vec<_>>(), vec!["b", "a"]);
    assert_eq!(bindings.len(), 2);
}

#[test]
fn later_capture_overwrites_in_place() {
    let mut bindings = Bindings::new();
    bindings.insert("x", Value::from(1));
    bindings.insert("y", Value::from(2));
    bindings.insert("x", Value::from(3));
    assert_eq!(bindings.get("x"), Some(&Value::from(3)));
    assert_eq!(bindings.names().collect::<Vec<_>>(), vec!["x", "y"]);
}

#[test]
fn lookup_and_emptiness() {
    let bindings: Bindings = [("k", Value::Null)].into_iter().collect();
    assert!(bindings.contains("k"));
    assert!(!bindings.contains("z"));
    assert_eq!(bindings.get("z"), None);
    assert!(!bindings.is_empty());
    assert!(Bindings::new().is_empty());
}

#[test]
fn into_iter_yields_owned_pairs() {
    let bindings: Bindings = [("a", Value::from(1)), ("b", Value::from(2))]
        .into_iter()
        .collect();
    let pairs: Vec<(String, Value)> = bindings.into_iter().collect();
    assert_eq!(
        pairs,
        vec![
            ("a".to_string(), Value::from(1)),
            ("b".to_string(), Value::from(2)),
        ]
    );
}

#[test]
fn display() {
    let bindings: Bindings = [("x", Value::from(2)), ("s", Value::from("foo"))]
        .into_iter()
        .collect();
    assert_eq!(bindings.to_string(), r#"{x: 2, s: "foo"}"#);
    assert_eq!(Bindings::new().to_string(), "{}");
}
