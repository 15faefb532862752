//! Structural matcher.
//!
//! Walks a [`Pattern`] and a [`Value`] together, short-circuiting on the
//! first sub-pattern that fails. The value is never modified.
//!
//! | Pattern        | Matches when                                   | Binds        |
//! |----------------|------------------------------------------------|--------------|
//! | `[p, ...]`     | array of the same length, elements match       | from elements|
//! | `{k: p, k2}`   | arrays, objects, instances having every key    | `k2`, from `p`|
//! | `Name(...)`    | type tag is `Name`, arguments match            | from arguments|
//! | `x`            | always                                         | `x`          |
//! | literal        | strictly equal                                 | nothing      |
//! | `_`, blank     | always                                         | nothing      |

use cm_ir::{FunctionArgs, ObjectEntry, Pattern};
use cm_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::errors::not_case_class;
use crate::{Bindings, MatchError, Value};

/// Match `value` against `pattern`.
///
/// Returns `Ok(Some(bindings))` on a match and `Ok(None)` on a non-match.
/// Bindings from a failed attempt are discarded.
pub fn try_match(pattern: &Pattern, value: &Value) -> Result<Option<Bindings>, MatchError> {
    let mut bindings = Bindings::new();
    if match_into(pattern, value, &mut bindings)? {
        Ok(Some(bindings))
    } else {
        Ok(None)
    }
}

/// Match `value` against `pattern`, adding captures to `bindings`.
///
/// On a non-match `bindings` may hold partial captures; callers that
/// continue with another pattern should start from a fresh set.
pub fn match_into(
    pattern: &Pattern,
    value: &Value,
    bindings: &mut Bindings,
) -> Result<bool, MatchError> {
    ensure_sufficient_stack(|| match pattern {
        Pattern::Array(elements) => match value {
            Value::Array(items) => match_elements(elements, items, bindings),
            _ => {
                trace!(found = value.type_name(), "array pattern: not an array");
                Ok(false)
            }
        },
        Pattern::Object(entries) => match_entries(entries, value, bindings),
        Pattern::Function { name, args } => {
            if value.type_tag() != Some(name.as_str()) {
                trace!(
                    expected = %name,
                    found = value.type_tag().unwrap_or("none"),
                    "constructor pattern: tag mismatch"
                );
                return Ok(false);
            }
            match args {
                None => Ok(true),
                Some(FunctionArgs::Positional(elements)) => match value {
                    Value::Instance(instance) => {
                        match_elements(elements, instance.args(), bindings)
                    }
                    _ => Err(not_case_class(name)),
                },
                Some(FunctionArgs::Keyed(entries)) => match_entries(entries, value, bindings),
            }
        }
        Pattern::Identifier(name) => {
            bindings.insert(name.as_str(), value.clone());
            Ok(true)
        }
        Pattern::Special(special) => Ok(value.strict_eq(&Value::special(*special))),
        Pattern::Number(n) => Ok(value.strict_eq(&Value::Number(*n))),
        Pattern::String(s) => Ok(value.as_str() == Some(s.as_str())),
        Pattern::Any | Pattern::Blank => Ok(true),
    })
}

/// Positional match; lengths must agree exactly.
fn match_elements(
    patterns: &[Pattern],
    values: &[Value],
    bindings: &mut Bindings,
) -> Result<bool, MatchError> {
    if patterns.len() != values.len() {
        trace!(
            expected = patterns.len(),
            found = values.len(),
            "array pattern: length mismatch"
        );
        return Ok(false);
    }
    for (pattern, value) in patterns.iter().zip(values) {
        if !match_into(pattern, value, bindings)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Keyed match; extra properties on the value are ignored.
fn match_entries(
    entries: &[ObjectEntry],
    value: &Value,
    bindings: &mut Bindings,
) -> Result<bool, MatchError> {
    if !value.is_object_like() {
        trace!(found = value.type_name(), "object pattern: no properties");
        return Ok(false);
    }
    for entry in entries {
        let Some(property) = value.property(&entry.key) else {
            trace!(key = %entry.key, "object pattern: missing key");
            return Ok(false);
        };
        match &entry.value {
            Some(pattern) => {
                if !match_into(pattern, &property, bindings)? {
                    return Ok(false);
                }
            }
            None => bindings.insert(entry.key.as_str(), property),
        }
    }
    Ok(true)
}
