use super::*;
use crate::CaseClass;
use pretty_assertions::assert_eq;

#[test]
fn type_tags() {
    assert_eq!(Value::Undefined.type_tag(), None);
    assert_eq!(Value::Null.type_tag(), None);
    assert_eq!(Value::from(true).type_tag(), Some("Boolean"));
    assert_eq!(Value::from(1).type_tag(), Some("Number"));
    assert_eq!(Value::from("s").type_tag(), Some("String"));
    assert_eq!(Value::array(vec![]).type_tag(), Some("Array"));
    assert_eq!(Value::object([("a", Value::Null)]).type_tag(), Some("Object"));
    assert_eq!(
        Value::tagged_object("Date", [("time", Value::from(0))]).type_tag(),
        Some("Date")
    );

    let point = CaseClass::with_fields("Point", &["x", "y"]);
    assert_eq!(point.call(&[]).type_tag(), Some("Point"));
}

#[test]
fn property_lookup() {
    let object = Value::object([("a", Value::from(1))]);
    assert_eq!(object.property("a"), Some(Value::from(1)));
    assert_eq!(object.property("b"), None);

    let array = Value::array(vec![Value::Null, Value::Null, Value::Null]);
    assert_eq!(array.property("length"), Some(Value::from(3)));
    assert_eq!(array.property("0"), None);

    assert_eq!(Value::from("abc").property("length"), None);
    assert_eq!(Value::Null.property("a"), None);
}

#[test]
fn object_like_values() {
    assert!(Value::array(vec![]).is_object_like());
    assert!(Value::object(Vec::<(String, Value)>::new()).is_object_like());
    assert!(!Value::from("x").is_object_like());
    assert!(!Value::Undefined.is_object_like());
}

#[test]
fn strict_equality_of_primitives() {
    assert!(Value::from(1).strict_eq(&Value::from(1.0)));
    assert!(Value::from(0.0).strict_eq(&Value::from(-0.0)));
    assert!(!Value::from(f64::NAN).strict_eq(&Value::from(f64::NAN)));
    assert!(Value::from("a").strict_eq(&Value::from("a")));
    assert!(!Value::from(1).strict_eq(&Value::from("1")));
    assert!(!Value::from(true).strict_eq(&Value::from(1)));
    assert!(!Value::Null.strict_eq(&Value::Undefined));
}

#[test]
fn strict_equality_of_containers_is_identity() {
    let a = Value::array(vec![Value::from(1)]);
    let b = Value::array(vec![Value::from(1)]);
    assert!(a.strict_eq(&a.clone()));
    assert!(!a.strict_eq(&b));
    // Structural equality still holds.
    assert_eq!(a, b);

    let o = Value::object([("k", Value::Null)]);
    assert!(o.strict_eq(&o.clone()));
    assert!(!o.strict_eq(&Value::object([("k", Value::Null)])));
}

#[test]
fn specials_map_to_values() {
    assert_eq!(Value::special(Special::True), Value::Bool(true));
    assert_eq!(Value::special(Special::False), Value::Bool(false));
    assert_eq!(Value::special(Special::Null), Value::Null);
    assert_eq!(Value::special(Special::Undefined), Value::Undefined);
}

#[test]
fn display_is_literal_like() {
    let value = Value::array(vec![
        Value::from(1),
        Value::from(1.5),
        Value::from("a\"b"),
        Value::Null,
        Value::Undefined,
        Value::object([("y", Value::from(2)), ("x", Value::from(true))]),
        Value::tagged_object("Date", [("t", Value::from(0))]),
    ]);
    assert_eq!(
        value.to_string(),
        r#"[1, 1.5, "a\"b", null, undefined, {x: true, y: 2}, Date {t: 0}]"#
    );
    assert_eq!(Value::from(f64::NAN).to_string(), "NaN");
    assert_eq!(Value::from(f64::NEG_INFINITY).to_string(), "-Infinity");
}

#[test]
fn accessors() {
    assert_eq!(Value::from(true).as_bool(), Some(true));
    assert_eq!(Value::from(2).as_number(), Some(2.0));
    assert_eq!(Value::from("s").as_str(), Some("s"));
    assert_eq!(Value::array(vec![Value::Null]).as_array().map(<[Value]>::len), Some(1));
    assert_eq!(Value::Null.as_str(), None);
    assert!(Value::Null.as_instance().is_none());
}

#[test]
fn values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
}
