use super::*;
use pretty_assertions::assert_eq;

fn bindings(pairs: &[(&str, Value)]) -> Bindings {
    pairs.iter().cloned().collect()
}

#[test]
fn value_handler_clones_its_result() {
    let handler = Handler::Value(vec![1, 2]);
    assert_eq!(handler.invoke(&Bindings::new(), &Value::Null), Some(vec![1, 2]));
    assert_eq!(handler.invoke(&Bindings::new(), &Value::Null), Some(vec![1, 2]));
}

#[test]
fn call_handler_sees_bindings_and_value() {
    let handler = Handler::call(|bindings: &Bindings, value: &Value| {
        format!("{bindings} from {value}")
    });
    let result = handler.invoke(
        &bindings(&[("x", Value::from(2))]),
        &Value::array(vec![Value::from(2)]),
    );
    assert_eq!(result.as_deref(), Some("{x: 2} from [2]"));
}

#[test]
fn guard_gates_the_inner_handler() {
    let positive = guard(
        |bindings: &Bindings, _: &Value| {
            bindings
                .get("x")
                .and_then(Value::as_number)
                .is_some_and(|x| x > 0.0)
        },
        Handler::Value("positive"),
    );
    assert!(positive.is_guarded());
    assert_eq!(
        positive.invoke(&bindings(&[("x", Value::from(3))]), &Value::Null),
        Some("positive")
    );
    assert_eq!(
        positive.invoke(&bindings(&[("x", Value::from(-3))]), &Value::Null),
        None
    );
}

#[test]
fn nested_guards_all_must_hold() {
    let handler = guard(
        |_: &Bindings, value: &Value| value.as_number().is_some(),
        guard(
            |_: &Bindings, value: &Value| value.as_number().is_some_and(|n| n < 10.0),
            Handler::Value(1),
        ),
    );
    assert_eq!(handler.invoke(&Bindings::new(), &Value::from(5)), Some(1));
    assert_eq!(handler.invoke(&Bindings::new(), &Value::from(50)), None);
    assert_eq!(handler.invoke(&Bindings::new(), &Value::from("5")), None);

    let Handler::Guarded(outer) = &handler else {
        panic!("expected a guarded handler");
    };
    assert!(outer.then().is_guarded());
    assert_eq!(format!("{handler:?}"), "Guarded(Guarded(Value(..)))");
}
