//! First-match-wins dispatch.

use std::sync::Arc;

use cm_ir::Pattern;
use cm_parse::{parse_pattern, ParseError};
use cm_patterns::{invalid_pattern, non_exhaustive_match, try_match, Bindings, MatchError, Value};
use tracing::debug;

use crate::Handler;

/// Pattern text paired with the handler to run when it matches.
#[derive(Debug)]
pub struct Arm<R> {
    pub pattern: String,
    pub handler: Handler<R>,
}

impl<R> Arm<R> {
    pub fn new(pattern: impl Into<String>, handler: Handler<R>) -> Self {
        Arm {
            pattern: pattern.into(),
            handler,
        }
    }

    /// Arm with a fixed result.
    pub fn value(pattern: impl Into<String>, result: R) -> Self {
        Self::new(pattern, Handler::Value(result))
    }

    /// Arm whose handler is called with the bindings and the value.
    pub fn call(
        pattern: impl Into<String>,
        f: impl Fn(&Bindings, &Value) -> R + Send + Sync + 'static,
    ) -> Self {
        Self::new(pattern, Handler::call(f))
    }
}

/// Run the first arm that matches `value`.
///
/// Every pattern reached is parsed afresh. Returns `Ok(None)` when no arm
/// matches; an unparsable pattern or a misused constructor pattern aborts
/// with an error, even if a later arm would have matched.
pub fn dispatch<R: Clone>(value: &Value, arms: &[Arm<R>]) -> Result<Option<R>, MatchError> {
    run_arms(value, arms, |text| parse_pattern(text).map(Arc::new))
}

/// Like [`dispatch`], but no matching arm is an error.
pub fn dispatch_exhaustive<R: Clone>(value: &Value, arms: &[Arm<R>]) -> Result<R, MatchError> {
    dispatch(value, arms)?.ok_or_else(|| exhausted(value, arms))
}

/// The dispatch loop, with pattern parsing supplied by the caller.
#[tracing::instrument(name = "dispatch", level = "debug", skip_all, fields(arms = arms.len()))]
pub(crate) fn run_arms<R: Clone>(
    value: &Value,
    arms: &[Arm<R>],
    mut resolve: impl FnMut(&str) -> Result<Arc<Pattern>, ParseError>,
) -> Result<Option<R>, MatchError> {
    for (index, arm) in arms.iter().enumerate() {
        let pattern =
            resolve(&arm.pattern).map_err(|error| invalid_pattern(&arm.pattern, error))?;

        // Each attempt starts from fresh bindings.
        let Some(bindings) = try_match(&pattern, value)? else {
            continue;
        };

        match arm.handler.invoke(&bindings, value) {
            Some(result) => {
                debug!(arm = index, pattern = %arm.pattern, %bindings, "arm matched");
                return Ok(Some(result));
            }
            None => debug!(arm = index, pattern = %arm.pattern, "guard rejected match"),
        }
    }

    debug!("no arm matched");
    Ok(None)
}

#[cold]
pub(crate) fn exhausted<R>(value: &Value, arms: &[Arm<R>]) -> MatchError {
    let tried = arms
        .iter()
        .map(|arm| format!("`{}`", arm.pattern))
        .collect::<Vec<_>>()
        .join(", ");
    let error = non_exhaustive_match(value);
    if tried.is_empty() {
        error.with_note("there are no arms")
    } else {
        error.with_note(format!("patterns tried: {tried}"))
    }
}
