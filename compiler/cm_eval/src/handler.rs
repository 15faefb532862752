//! What an arm does once its pattern matches.

use std::fmt;

use cm_patterns::{Bindings, Value};

type Callback<R> = dyn Fn(&Bindings, &Value) -> R + Send + Sync;
type Predicate = dyn Fn(&Bindings, &Value) -> bool + Send + Sync;

/// Result producer for one arm.
pub enum Handler<R> {
    /// Fixed result, cloned out on every match.
    Value(R),
    /// Called with the captured bindings and the original value.
    Call(Box<Callback<R>>),
    /// Inner handler that only runs when a predicate holds.
    Guarded(Guarded<R>),
}

impl<R> Handler<R> {
    pub fn call(f: impl Fn(&Bindings, &Value) -> R + Send + Sync + 'static) -> Self {
        Handler::Call(Box::new(f))
    }

    pub fn is_guarded(&self) -> bool {
        matches!(self, Handler::Guarded(_))
    }
}

impl<R: Clone> Handler<R> {
    /// Produce the arm's result, or `None` when a guard rejects the match.
    pub fn invoke(&self, bindings: &Bindings, value: &Value) -> Option<R> {
        match self {
            Handler::Value(result) => Some(result.clone()),
            Handler::Call(f) => Some(f(bindings, value)),
            Handler::Guarded(guarded) => {
                if guarded.holds(bindings, value) {
                    guarded.then.invoke(bindings, value)
                } else {
                    None
                }
            }
        }
    }
}

impl<R> fmt::Debug for Handler<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Value(_) => write!(f, "Value(..)"),
            Handler::Call(_) => write!(f, "Call(..)"),
            Handler::Guarded(guarded) => write!(f, "Guarded({:?})", guarded.then),
        }
    }
}

/// Predicate plus the handler it protects.
///
/// Built with [`guard`]. A rejected guard makes the arm count as a
/// non-match, so dispatch moves on to the next arm.
pub struct Guarded<R> {
    cond: Box<Predicate>,
    then: Box<Handler<R>>,
}

impl<R> Guarded<R> {
    pub fn holds(&self, bindings: &Bindings, value: &Value) -> bool {
        (self.cond)(bindings, value)
    }

    pub fn then(&self) -> &Handler<R> {
        &self.then
    }
}

/// Run `then` only when `cond` holds for the bindings and value.
///
/// Guards nest: `guard(a, guard(b, h))` requires both.
pub fn guard<R>(
    cond: impl Fn(&Bindings, &Value) -> bool + Send + Sync + 'static,
    then: Handler<R>,
) -> Handler<R> {
    Handler::Guarded(Guarded {
        cond: Box::new(cond),
        then: Box::new(then),
    })
}

#[cfg(test)]
mod tests;
