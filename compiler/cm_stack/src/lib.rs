//! Stack growth for the recursive parser and matcher.
//!
//! Both walk patterns like `[[[[...]]]]` one frame per nesting level, and
//! the nesting depth comes from caller-supplied text. Every recursive step
//! runs inside [`ensure_sufficient_stack`], which moves onto a freshly
//! allocated segment when the current one runs low.
//!
//! On `wasm32` the guard is a plain call.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// close to exhausted.
///
/// ```text
/// fn parse_array(&mut self) -> Result<Pattern, ParseError> {
///     ensure_sufficient_stack(|| {
///         // parse elements, each of which may be another array
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
