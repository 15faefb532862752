//! Structural pattern matching for dynamically typed values.
//!
//! Patterns are written as text, parsed into a small AST, and matched
//! against [`Value`]s. A successful match captures named sub-values into
//! [`Bindings`]; a dispatch runs the first arm whose pattern matches.
//!
//! ```text
//! let pair = define_case_class("Pair", |args| ...);
//! let area = dispatch_match(&shape, &[
//!     Arm::call("Pair([w, h])", |b, _| w(b) * h(b)),
//!     Arm::call("{radius: r}", |b, _| PI * r(b) * r(b)),
//!     Arm::value("_", 0.0),
//! ])?;
//! ```
//!
//! # Pattern language
//!
//! | Text              | Matches                                             |
//! |-------------------|-----------------------------------------------------|
//! | `x`               | anything, binding it to `x`                         |
//! | `_`               | anything                                            |
//! | `1`, `'s'`, `null`| a strictly equal primitive                          |
//! | `[a, , b]`        | an array of exactly three elements                  |
//! | `{k, m: p}`       | any value with properties `k` and `m`               |
//! | `Name()`          | a value whose type tag is `Name`                    |
//! | `Name([a, b])`    | a case-class instance, by constructor argument      |
//! | `Name({k})`       | a value tagged `Name`, by property                  |
//!
//! # Logging
//!
//! All crates log through `tracing`. Call [`init_tracing`] to print events
//! when `RUST_LOG` is set; set `CASEMATCH_TRACE_TREE` for indented span
//! output.

use std::sync::Once;

pub use cm_diagnostic::emitter::{render, ColorMode, TerminalEmitter};
pub use cm_diagnostic::{Diagnostic, ErrorCode};
pub use cm_eval::{
    dispatch, dispatch_exhaustive, guard, Arm, Guarded, Handler, Matcher, MatcherBuilder,
    PatternCache,
};
pub use cm_ir::{FunctionArgs, ObjectEntry, Pattern, Span, Special};
pub use cm_parse::{parse_constructor, parse_pattern, ParseError, ParseErrorKind};
pub use cm_patterns::{
    try_match, Bindings, CaseClass, CaseInstance, MatchError, MatchErrorKind, Properties, Value,
};

/// Dispatch `value` over `arms`, first match wins. Alias of [`dispatch`].
pub use cm_eval::dispatch as dispatch_match;

/// Define a case class from a name and a property initializer. Alias of
/// [`CaseClass::define`].
pub fn define_case_class(
    name: impl Into<String>,
    init: impl Fn(&[Value]) -> Properties + Send + Sync + 'static,
) -> CaseClass {
    CaseClass::define(name, init)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing output.
///
/// Does nothing unless `RUST_LOG` is set (for example
/// `RUST_LOG=cm_eval=debug`). With `CASEMATCH_TRACE_TREE` also set, spans
/// are printed as an indented tree. Safe to call more than once; a
/// subscriber installed elsewhere is left in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var_os("RUST_LOG").is_none() {
            return;
        }

        let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
        let installed = if std::env::var_os("CASEMATCH_TRACE_TREE").is_some() {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_level(true))
                .try_init()
        };
        if installed.is_err() {
            tracing::debug!("global subscriber already set; keeping it");
        }
    });
}
