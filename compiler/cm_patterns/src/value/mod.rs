//! Dynamically typed runtime values.
//!
//! Patterns are matched against [`Value`]s. The model mirrors a dynamic
//! host language: primitives, arrays, keyed objects, and instances of case
//! classes. Reflection is replaced by an explicit type tag
//! ([`Value::type_tag`]) that constructor patterns compare against.
//!
//! # Heap Allocation
//!
//! Strings, arrays and objects live behind [`Heap<T>`], whose constructor
//! is private to this module:
//!
//! ```text
//! let s = Value::string("hello");                  // OK
//! let xs = Value::array(vec![Value::from(1)]);     // OK
//! let s = Value::Str(Heap::new("hello".into()));   // ERROR: Heap::new is pub(super)
//! ```
//!
//! All heap types are `Arc`-backed, so values are cheap to clone and safe
//! to share across threads.

mod heap;
mod object;

use std::fmt;

use cm_ir::Special;

pub use heap::Heap;
pub use object::{ObjectValue, Properties};

use crate::CaseInstance;

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(Heap<String>),
    Array(Heap<Vec<Value>>),
    Object(ObjectValue),
    /// Value built by a [`CaseClass`](crate::CaseClass).
    Instance(CaseInstance),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Heap::new(items))
    }

    /// Plain object literal, tagged `Object`.
    ///
    /// ```text
    /// let point = Value::object([("x", Value::from(1)), ("y", Value::from(2))]);
    /// ```
    pub fn object<K: Into<String>>(properties: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Object(ObjectValue::new(None, collect_properties(properties)))
    }

    /// Object carrying an explicit constructor tag, for host types that are
    /// not case classes (`Date`, `RegExp`, ...).
    pub fn tagged_object<K: Into<String>>(
        type_name: impl Into<String>,
        properties: impl IntoIterator<Item = (K, Value)>,
    ) -> Self {
        Value::Object(ObjectValue::new(
            Some(type_name.into()),
            collect_properties(properties),
        ))
    }

    /// The value a literal word stands for.
    pub fn special(special: Special) -> Self {
        match special {
            Special::True => Value::Bool(true),
            Special::False => Value::Bool(false),
            Special::Null => Value::Null,
            Special::Undefined => Value::Undefined,
        }
    }
}

fn collect_properties<K: Into<String>>(
    properties: impl IntoIterator<Item = (K, Value)>,
) -> Properties {
    properties
        .into_iter()
        .map(|(key, value)| (key.into(), value))
        .collect()
}

impl Value {
    /// Constructor tag used by `Name(...)` patterns.
    ///
    /// `Boolean`, `Number`, `String`, `Array`, `Object` (or the object's
    /// explicit tag), the class name for case-class instances, and `None`
    /// for `null` and `undefined`.
    pub fn type_tag(&self) -> Option<&str> {
        match self {
            Value::Undefined | Value::Null => None,
            Value::Bool(_) => Some("Boolean"),
            Value::Number(_) => Some("Number"),
            Value::Str(_) => Some("String"),
            Value::Array(_) => Some("Array"),
            Value::Object(object) => Some(object.tag()),
            Value::Instance(instance) => Some(instance.name()),
        }
    }

    /// Lower-case kind name for messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Instance(_) => "instance",
        }
    }

    /// Whether keyed lookup applies: arrays, objects and instances.
    pub fn is_object_like(&self) -> bool {
        matches!(
            self,
            Value::Array(_) | Value::Object(_) | Value::Instance(_)
        )
    }

    /// Keyed lookup.
    ///
    /// Objects and instances expose their properties; arrays expose
    /// `length`. Everything else has no properties.
    pub fn property(&self, key: &str) -> Option<Value> {
        match self {
            Value::Object(object) => object.get(key).cloned(),
            Value::Instance(instance) => instance.property(key).cloned(),
            Value::Array(items) if key == "length" => Some(Value::from(items.len())),
            _ => None,
        }
    }

    /// Strict equality, as `===` in the host language.
    ///
    /// Primitives compare by kind and value (`NaN` is never equal, `0` and
    /// `-0` are). Arrays, objects and instances compare by identity.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => Heap::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            (Value::Instance(a), Value::Instance(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&CaseInstance> {
        match self {
            Value::Instance(instance) => Some(instance),
            _ => None,
        }
    }
}

// Conversions

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<usize> for Value {
    #[expect(
        clippy::cast_precision_loss,
        reason = "lengths beyond 2^53 are not representable in the host number type either"
    )]
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::array(items)
    }
}

impl From<CaseInstance> for Value {
    fn from(instance: CaseInstance) -> Self {
        Value::Instance(instance)
    }
}

// Trait Implementations

/// Structural equality, for tests and assertions.
///
/// Unlike [`Value::strict_eq`], arrays and objects compare by contents and
/// `NaN` follows `f64` rules. Instances compare by class and arguments.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Instance(a), Value::Instance(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Number(n) => write!(f, "Number({n})"),
            Value::Str(s) => write!(f, "Str({:?})", &***s),
            Value::Array(items) => write!(f, "Array({:?})", &***items),
            Value::Object(object) => match object.type_name() {
                Some(tag) => write!(f, "Object({tag}, {:?})", object.properties()),
                None => write!(f, "Object({:?})", object.properties()),
            },
            Value::Instance(instance) => write!(f, "Instance({instance:?})"),
        }
    }
}

/// Literal-like rendering: `undefined`, `1.5`, `"text"`, `[1, 2]`,
/// `{x: 1}`, `Point {x: 1}`, `Pair(1, 2)`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write_number(f, *n),
            Value::Str(s) => write!(f, "{:?}", &***s),
            Value::Array(items) => {
                write!(f, "[")?;
                write_joined(f, items.iter())?;
                write!(f, "]")
            }
            Value::Object(object) => {
                if let Some(tag) = object.type_name() {
                    write!(f, "{tag} ")?;
                }
                write!(f, "{{")?;
                for (i, (key, value)) in object.properties().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
            Value::Instance(instance) => write!(f, "{instance}"),
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        write!(f, "{}Infinity", if n < 0.0 { "-" } else { "" })
    } else {
        write!(f, "{n}")
    }
}

/// Write `items` separated by `, `.
pub(crate) fn write_joined<'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = &'a Value>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
