//! Keyed object values.

use std::collections::BTreeMap;

use super::{Heap, Value};

/// Property map of an object or case-class instance.
///
/// Sorted by key, so rendering is deterministic.
pub type Properties = BTreeMap<String, Value>;

/// Keyed structure, optionally tagged with a constructor name.
///
/// An untagged object reports the type tag `Object`. A tagged one reports
/// its tag, so `Point({x, y})` can match it, but it carries no constructor
/// arguments: only [`CaseInstance`](crate::CaseInstance)s do.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue {
    type_name: Option<Heap<String>>,
    properties: Heap<Properties>,
}

impl ObjectValue {
    pub(super) fn new(type_name: Option<String>, properties: Properties) -> Self {
        ObjectValue {
            type_name: type_name.map(Heap::new),
            properties: Heap::new(properties),
        }
    }

    /// Explicit constructor tag, if any.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref().map(String::as_str)
    }

    /// Type tag: the explicit tag, or `Object`.
    pub fn tag(&self) -> &str {
        self.type_name().unwrap_or("Object")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Identity comparison: both handles share one allocation.
    pub fn ptr_eq(&self, other: &ObjectValue) -> bool {
        Heap::ptr_eq(&self.properties, &other.properties)
    }
}
