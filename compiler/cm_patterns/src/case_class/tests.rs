use super::*;
use pretty_assertions::assert_eq;

#[test]
fn with_fields_assigns_positionally() {
    let pair = CaseClass::with_fields("Pair", &["first", "second"]);
    let value = pair.construct(vec![Value::from(1), Value::from("b")]);
    let Value::Instance(instance) = &value else {
        panic!("expected an instance, got {value:?}");
    };
    assert_eq!(instance.name(), "Pair");
    assert_eq!(instance.args(), &[Value::from(1), Value::from("b")]);
    assert_eq!(instance.property("first"), Some(&Value::from(1)));
    assert_eq!(instance.property("second"), Some(&Value::from("b")));
}

#[test]
fn missing_arguments_are_undefined() {
    let point = CaseClass::with_fields("Point", &["x", "y"]);
    let value = point.call(&[Value::from(3)]);
    assert_eq!(value.property("y"), Some(Value::Undefined));
    assert_eq!(value.as_instance().map(|i| i.args().len()), Some(1));
}

#[test]
fn extra_arguments_stay_positional() {
    let unit = CaseClass::with_fields("Unit", &[]);
    let value = unit.call(&[Value::from(1), Value::from(2)]);
    let instance = value.as_instance();
    assert!(instance.is_some_and(|i| i.properties().is_empty()));
    assert_eq!(instance.map(|i| i.args().len()), Some(2));
}

#[test]
fn custom_initializer() {
    let range = CaseClass::define("Range", |args| {
        let lo = args.first().and_then(Value::as_number).unwrap_or(0.0);
        let hi = args.get(1).and_then(Value::as_number).unwrap_or(0.0);
        Properties::from([
            ("lo".to_string(), Value::from(lo)),
            ("width".to_string(), Value::from(hi - lo)),
        ])
    });
    let value = range.call(&[Value::from(2), Value::from(5)]);
    assert_eq!(value.property("width"), Some(Value::from(3)));
    assert_eq!(value.property("hi"), None);
}

#[test]
fn each_construction_owns_its_arguments() {
    let pair = CaseClass::with_fields("Pair", &["a", "b"]);
    let args = [Value::from(1), Value::from(2)];
    let first = pair.call(&args);
    let second = pair.call(&args);
    assert_eq!(first, second);
    assert!(!first.strict_eq(&second));
    assert!(first.strict_eq(&first.clone()));
}

#[test]
fn class_identity() {
    let a = CaseClass::with_fields("Same", &[]);
    let b = CaseClass::with_fields("Same", &[]);
    assert_eq!(a, a.clone());
    assert_ne!(a, b);
    // Same tag, different class: structurally different instances.
    assert_ne!(a.call(&[]), b.call(&[]));
}

#[test]
fn display_and_debug() {
    let pair = CaseClass::with_fields("Pair", &["a", "b"]);
    let nested = pair.call(&[Value::from(1), pair.call(&[Value::from("x"), Value::Null])]);
    assert_eq!(nested.to_string(), r#"Pair(1, Pair("x", null))"#);
    assert_eq!(format!("{pair:?}"), "CaseClass(Pair)");
    assert_eq!(
        format!("{nested:?}"),
        r#"Instance(Pair[Number(1), Instance(Pair[Str("x"), Null])])"#
    );
}
