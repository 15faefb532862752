//! Case classes: tagged product values that remember their constructor
//! arguments.
//!
//! A [`CaseClass`] wraps an initializer that turns constructor arguments
//! into properties. Every [`CaseInstance`] it builds carries the class (its
//! type tag) and its own copy of the ordered arguments, which is what lets
//! `Pair([x, y])` destructure by position.
//!
//! ```text
//! let pair = CaseClass::with_fields("Pair", &["first", "second"]);
//! let value = pair.construct(vec![Value::from(1), Value::from(2)]);
//! // matches `Pair([a, b])` and `Pair({first, second})`
//! ```

use std::fmt;
use std::sync::Arc;

use crate::value::{write_joined, Properties, Value};

type Initializer = dyn Fn(&[Value]) -> Properties + Send + Sync;

struct ClassData {
    name: String,
    init: Box<Initializer>,
}

/// Handle to a case-class definition. Cheap to clone.
#[derive(Clone)]
pub struct CaseClass(Arc<ClassData>);

impl CaseClass {
    /// Define a case class from an initializer that computes the instance
    /// properties from the constructor arguments.
    pub fn define(
        name: impl Into<String>,
        init: impl Fn(&[Value]) -> Properties + Send + Sync + 'static,
    ) -> Self {
        CaseClass(Arc::new(ClassData {
            name: name.into(),
            init: Box::new(init),
        }))
    }

    /// Define a case class that stores argument `i` under `fields[i]`.
    ///
    /// Missing arguments become `undefined`; extra arguments are kept only
    /// as constructor arguments.
    pub fn with_fields(name: impl Into<String>, fields: &[&str]) -> Self {
        let fields: Vec<String> = fields.iter().map(|field| (*field).to_string()).collect();
        Self::define(name, move |args| {
            fields
                .iter()
                .enumerate()
                .map(|(i, field)| {
                    let value = args.get(i).cloned().unwrap_or(Value::Undefined);
                    (field.clone(), value)
                })
                .collect()
        })
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Build an instance, taking ownership of the arguments.
    pub fn construct(&self, args: Vec<Value>) -> Value {
        let properties = (self.0.init)(&args);
        Value::Instance(CaseInstance(Arc::new(InstanceData {
            class: self.clone(),
            args,
            properties,
        })))
    }

    /// Build an instance from borrowed arguments.
    pub fn call(&self, args: &[Value]) -> Value {
        self.construct(args.to_vec())
    }

    /// Whether both handles refer to the same definition.
    pub fn ptr_eq(&self, other: &CaseClass) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for CaseClass {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for CaseClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CaseClass({})", self.name())
    }
}

struct InstanceData {
    class: CaseClass,
    args: Vec<Value>,
    properties: Properties,
}

/// Value built by a [`CaseClass`].
///
/// The class and argument vector are fixed at construction.
#[derive(Clone)]
pub struct CaseInstance(Arc<InstanceData>);

impl CaseInstance {
    pub fn class(&self) -> &CaseClass {
        &self.0.class
    }

    /// Type tag: the class name.
    pub fn name(&self) -> &str {
        self.0.class.name()
    }

    /// Constructor arguments, in order.
    pub fn args(&self) -> &[Value] {
        &self.0.args
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.0.properties.get(key)
    }

    pub fn properties(&self) -> &Properties {
        &self.0.properties
    }

    /// Identity comparison, used by strict equality.
    pub fn ptr_eq(&self, other: &CaseInstance) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Same class and structurally equal arguments.
impl PartialEq for CaseInstance {
    fn eq(&self, other: &Self) -> bool {
        self.class() == other.class() && self.args() == other.args()
    }
}

impl fmt::Debug for CaseInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:?}", self.name(), self.args())
    }
}

/// `Name(arg, ...)`
impl fmt::Display for CaseInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name())?;
        write_joined(f, self.args().iter())?;
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests;
