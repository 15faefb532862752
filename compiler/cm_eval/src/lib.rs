//! Match dispatcher for casematch.
//!
//! A dispatch takes a value and an ordered list of [`Arm`]s, each pairing
//! pattern text with a [`Handler`]. Arms are tried in order and the first
//! one whose pattern matches and whose guard (if any) holds produces the
//! result:
//!
//! ```text
//! let arms = [
//!     Arm::new("[x, y]", Handler::call(|b, _| sum(b))),
//!     Arm::new("{}", guard(|b, _| ..., Handler::Value(0.0))),
//!     Arm::value("_", -1.0),
//! ];
//! dispatch(&value, &arms)?;
//! ```
//!
//! - [`dispatch`] parses every pattern it reaches.
//! - [`Matcher`] holds a reusable arm list and memoizes parses in a
//!   [`PatternCache`] that may be shared between matchers and threads.

mod cache;
mod dispatch;
mod handler;
mod matcher;

pub use cache::PatternCache;
pub use dispatch::{dispatch, dispatch_exhaustive, Arm};
pub use handler::{guard, Guarded, Handler};
pub use matcher::{Matcher, MatcherBuilder};
