//! In-memory state store for testing and ephemeral use.
//!
//! [`InMemoryStateStore`] keeps all entries in a `BTreeMap` protected by a
//! `RwLock`, which gives the lexicographic key ordering the [`StateStore`]
//! contract requires for free. Suitable for unit tests, demos, and
//! short-lived processes; data is lost when the store is dropped.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::traits::{ScanCursor, StateEntry, StateStore};

/// An in-memory implementation of [`StateStore`].
pub struct InMemoryStateStore {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryStateStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Remove all entries from the store.
    pub fn clear(&self) {
        self.entries.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for InMemoryStateStore {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn range_scan(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> StoreResult<Box<dyn ScanCursor + '_>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))?;

        let upper = match end {
            Some(end) => Bound::Excluded(end.to_string()),
            None => Bound::Unbounded,
        };
        // Snapshot the requested range at cursor creation so the cursor is
        // isolated from writes that land while it is being consumed.
        let snapshot: Vec<StateEntry> = entries
            .range((Bound::Included(start.to_string()), upper))
            .map(|(key, value)| StateEntry {
                key: key.clone(),
                value: value.clone(),
            })
            .collect();

        Ok(Box::new(MemoryScanCursor {
            entries: snapshot.into_iter(),
        }))
    }
}

/// Cursor over a range snapshot taken at scan time.
struct MemoryScanCursor {
    entries: std::vec::IntoIter<StateEntry>,
}

impl ScanCursor for MemoryScanCursor {
    fn next_entry(&mut self) -> StoreResult<Option<StateEntry>> {
        Ok(self.entries.next())
    }
}

impl std::fmt::Debug for InMemoryStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStateStore")
            .field("entry_count", &self.len())
            .finish()
    }
}
