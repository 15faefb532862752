//! Reusable arm sets.
//!
//! A [`Matcher`] is a dispatch with its arms fixed up front, applied to any
//! number of values. With caching on (the default) each pattern is parsed
//! at most once per [`PatternCache`].

use std::sync::Arc;

use cm_parse::parse_pattern;
use cm_patterns::{invalid_pattern, Bindings, MatchError, Value};

use crate::dispatch::{exhausted, run_arms};
use crate::{Arm, Handler, PatternCache};

/// Ordered arms plus an optional pattern cache.
#[derive(Debug)]
pub struct Matcher<R> {
    arms: Vec<Arm<R>>,
    cache: Option<PatternCache>,
}

impl<R> Matcher<R> {
    pub fn builder() -> MatcherBuilder<R> {
        MatcherBuilder::new()
    }

    pub fn arms(&self) -> &[Arm<R>] {
        &self.arms
    }

    pub fn cache(&self) -> Option<&PatternCache> {
        self.cache.as_ref()
    }

    /// Parse every arm's pattern, reporting the first that fails.
    ///
    /// Warms the cache when there is one.
    pub fn validate(&self) -> Result<(), MatchError> {
        for arm in &self.arms {
            let parsed = match &self.cache {
                Some(cache) => cache.get_or_parse(&arm.pattern).map(drop),
                None => parse_pattern(&arm.pattern).map(drop),
            };
            parsed.map_err(|error| invalid_pattern(&arm.pattern, error))?;
        }
        Ok(())
    }
}

impl<R: Clone> Matcher<R> {
    /// Run the first arm that matches `value`; `Ok(None)` if none does.
    pub fn apply(&self, value: &Value) -> Result<Option<R>, MatchError> {
        match &self.cache {
            Some(cache) => run_arms(value, &self.arms, |text| cache.get_or_parse(text)),
            None => run_arms(value, &self.arms, |text| parse_pattern(text).map(Arc::new)),
        }
    }

    /// Like [`apply`](Self::apply), but no matching arm is an error.
    pub fn apply_exhaustive(&self, value: &Value) -> Result<R, MatchError> {
        self.apply(value)?.ok_or_else(|| exhausted(value, &self.arms))
    }
}

/// Builder for [`Matcher`].
///
/// Caching defaults to on with a private cache.
#[must_use]
pub struct MatcherBuilder<R> {
    arms: Vec<Arm<R>>,
    cache: bool,
    shared_cache: Option<PatternCache>,
}

impl<R> MatcherBuilder<R> {
    pub fn new() -> Self {
        MatcherBuilder {
            arms: Vec::new(),
            cache: true,
            shared_cache: None,
        }
    }

    /// Turn pattern caching on or off.
    ///
    /// Off means every pattern is re-parsed on every application.
    pub fn cache(mut self, enabled: bool) -> Self {
        self.cache = enabled;
        self
    }

    /// Use `cache` instead of a private one. Implies caching.
    pub fn shared_cache(mut self, cache: PatternCache) -> Self {
        self.cache = true;
        self.shared_cache = Some(cache);
        self
    }

    /// Append an arm.
    pub fn arm(mut self, pattern: impl Into<String>, handler: Handler<R>) -> Self {
        self.arms.push(Arm::new(pattern, handler));
        self
    }

    /// Append an arm with a fixed result.
    pub fn value(self, pattern: impl Into<String>, result: R) -> Self {
        self.arm(pattern, Handler::Value(result))
    }

    /// Append an arm whose handler is called with the bindings and value.
    pub fn call(
        self,
        pattern: impl Into<String>,
        f: impl Fn(&Bindings, &Value) -> R + Send + Sync + 'static,
    ) -> Self {
        self.arm(pattern, Handler::call(f))
    }

    pub fn build(self) -> Matcher<R> {
        let cache = if self.cache {
            Some(self.shared_cache.unwrap_or_default())
        } else {
            None
        };
        Matcher {
            arms: self.arms,
            cache,
        }
    }
}

impl<R> Default for MatcherBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
