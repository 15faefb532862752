//! Runtime side of casematch.
//!
//! This crate provides:
//! - Runtime values (`Value`, `Heap`, `ObjectValue`)
//! - Case classes (`CaseClass`, `CaseInstance`) for positional destructuring
//! - The structural matcher (`try_match`, `match_into`) and its `Bindings`
//! - Match errors (`MatchError`, `MatchErrorKind`)
//!
//! Everything here is immutable once built and `Send + Sync`.

mod bindings;
mod case_class;
mod errors;
mod matcher;
mod value;

pub use bindings::Bindings;
pub use case_class::{CaseClass, CaseInstance};
pub use errors::{
    invalid_pattern, non_exhaustive_match, not_case_class, MatchError, MatchErrorKind,
};
pub use matcher::{match_into, try_match};
pub use value::{Heap, ObjectValue, Properties, Value};
