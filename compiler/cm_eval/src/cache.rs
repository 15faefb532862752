//! Memoized pattern parsing.

use std::fmt;
use std::sync::Arc;

use cm_ir::Pattern;
use cm_parse::{parse_pattern, ParseError};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Parsed patterns keyed by their text.
///
/// Clones share one table, so a cache can be handed to several matchers
/// and threads. Only successful parses are stored; a text that fails to
/// parse is parsed again, and fails again, on every lookup.
///
/// A cache from [`new`](Self::new) is unbounded and only shrinks on
/// [`clear`](Self::clear). Use [`bounded`](Self::bounded) when pattern
/// texts come from outside the program: once full, new texts are parsed
/// but not stored.
#[derive(Clone, Default)]
pub struct PatternCache {
    entries: Arc<RwLock<FxHashMap<String, Arc<Pattern>>>>,
    limit: Option<usize>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache that stores at most `limit` patterns.
    pub fn bounded(limit: usize) -> Self {
        Self {
            entries: Arc::default(),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Return the cached parse of `text`, parsing and storing it on a miss.
    pub fn get_or_parse(&self, text: &str) -> Result<Arc<Pattern>, ParseError> {
        if let Some(pattern) = self.get(text) {
            debug!(pattern = text, "pattern cache hit");
            return Ok(pattern);
        }

        // Parse outside the lock; when two threads race, the first insert wins.
        let parsed = Arc::new(parse_pattern(text)?);
        let mut entries = self.entries.write();
        if let Some(pattern) = entries.get(text) {
            return Ok(Arc::clone(pattern));
        }
        if self.limit.is_some_and(|limit| entries.len() >= limit) {
            debug!(pattern = text, entries = entries.len(), "pattern cache full");
            return Ok(parsed);
        }
        entries.insert(text.to_string(), Arc::clone(&parsed));
        Ok(parsed)
    }

    pub fn get(&self, text: &str) -> Option<Arc<Pattern>> {
        self.entries.read().get(text).cloned()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.entries.read().contains_key(text)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Whether both handles share one table.
    pub fn ptr_eq(&self, other: &PatternCache) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl fmt::Debug for PatternCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PatternCache({} entries)", self.len())
    }
}
