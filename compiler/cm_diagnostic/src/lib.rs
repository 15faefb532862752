//! Diagnostic system for pattern and match errors.
//!
//! Every error raised by the engine maps to:
//! - an error code for searchability ([`ErrorCode`])
//! - a clear message (what went wrong)
//! - a primary span inside the pattern text (where it went wrong)
//! - optional notes and suggestions (how to fix it)
//!
//! [`emitter::render`] draws a diagnostic under the pattern text it refers to.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
