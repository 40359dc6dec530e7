//! Known project-code cache.
//!
//! The original front-end kept a process-wide mutable set of known codes;
//! here the cache is an explicitly owned value injected into the view
//! builder, with a population/clear lifecycle driven from the catalog
//! boundary. While unpopulated the unknown-code check is skipped entirely,
//! so a host that never syncs the catalog loses nothing.

use std::collections::HashSet;

use parking_lot::RwLock;
use planboard_domain::normalize_code;
use tracing::info;

/// Injected cache of known project codes, uppercased for comparisons.
#[derive(Debug, Default)]
pub struct ProjectCodeCache {
    codes: RwLock<HashSet<String>>,
}

impl ProjectCodeCache {
    /// Create an empty, unpopulated cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cache contents from the catalog boundary.
    pub fn populate<I, S>(&self, codes: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized: HashSet<String> =
            codes.into_iter().map(|code| normalize_code(code.as_ref())).collect();
        let count = normalized.len();

        *self.codes.write() = normalized;
        info!(count, "project code cache populated");
    }

    /// Forget every known code (tenant switch, logout).
    pub fn clear(&self) {
        self.codes.write().clear();
    }

    /// Whether `code` is a known project code. Case-insensitive.
    pub fn contains(&self, code: &str) -> bool {
        self.codes.read().contains(&normalize_code(code))
    }

    /// Number of known codes.
    pub fn len(&self) -> usize {
        self.codes.read().len()
    }

    /// True while the cache has not been populated.
    pub fn is_empty(&self) -> bool {
        self.codes.read().is_empty()
    }
}
