//! Atomically-replaced snapshot caches.
//!
//! One cache per source. Writers replace the whole value, never individual
//! fields, so readers can never observe a torn reference. There is no way
//! to clear a cache: a failed refresh simply does not write, leaving the
//! previous snapshot for readers.

use std::sync::{Arc, RwLock};

/// A shared, whole-value-replaced snapshot of some fetched state.
///
/// Cloning is cheap and shares the underlying slot.
#[derive(Debug)]
pub struct SnapshotCache<T> {
    slot: Arc<RwLock<Option<Arc<T>>>>,
}

impl<T> SnapshotCache<T> {
    /// An empty cache; `snapshot` returns `None` until the first `replace`.
    pub fn new() -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
        }
    }

    /// Replace the cached value wholesale.
    pub fn replace(&self, value: T) {
        let mut slot = match self.slot.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *slot = Some(Arc::new(value));
    }

    /// The most recently stored snapshot, if any.
    pub fn snapshot(&self) -> Option<Arc<T>> {
        let slot = match self.slot.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        slot.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_none()
    }
}

impl<T> Clone for SnapshotCache<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> Default for SnapshotCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
