//! casematch IR - the pattern AST and source spans.
//!
//! This crate holds the data shared by the parser, the matcher and the
//! dispatcher:
//! - [`Span`] for byte ranges inside a pattern string
//! - [`Pattern`], the closed sum type every pattern string parses into
//! - [`ObjectEntry`], [`FunctionArgs`] and [`Special`], its building blocks
//!
//! # Design
//!
//! - **Closed AST**: one variant per node kind, matched exhaustively by the
//!   parser and the matcher. Illegal shapes (a function whose argument is a
//!   string, a blank outside a list) are not representable.
//! - **Owned children**: nodes own their children, so an AST is a tree and
//!   can be shared read-only behind an `Arc` once parsed.
//! - **Canonical text**: `Display` renders a pattern back to text that parses
//!   to a structurally identical AST.

mod pattern;
mod span;

pub use pattern::{FunctionArgs, ObjectEntry, Pattern, Special};
pub use span::Span;
