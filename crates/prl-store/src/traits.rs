//! The [`StateStore`] trait defining the key-value storage interface.
//!
//! Any backend (in-memory, embedded database, external ledger) implements
//! this trait to hold record bytes for the Patient Request Ledger.

use crate::error::StoreResult;

/// One key-value entry yielded by a range scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateEntry {
    /// The key the value is stored under.
    pub key: String,
    /// The raw stored bytes.
    pub value: Vec<u8>,
}

/// Minimal key-value capability set the contract layer depends on.
///
/// All implementations must satisfy these invariants:
/// - `get` is side-effect free and returns `Ok(None)` for a key never set.
/// - `put` is an upsert and is durable from the caller's point of view once
///   it returns `Ok`.
/// - Keys are ordered by lexicographic byte comparison; `range_scan` yields
///   entries in that order.
/// - All backend faults are propagated as errors, never silently ignored.
pub trait StateStore: Send + Sync {
    /// Read the raw value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key was never set.
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Store `value` under `key`, overwriting any prior value.
    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()>;

    /// Scan all entries with `start <= key < end` in ascending key order.
    ///
    /// `end = None` scans to the end of the keyspace. The returned cursor
    /// is finite and not restartable; the underlying resource is released
    /// when the cursor is dropped, on every exit path.
    fn range_scan(&self, start: &str, end: Option<&str>)
        -> StoreResult<Box<dyn ScanCursor + '_>>;
}

/// A cursor over the results of a [`StateStore::range_scan`].
///
/// Backends that stream from an external resource may fail mid-scan; each
/// step therefore returns a `Result`. Dropping the cursor releases the
/// underlying resource.
pub trait ScanCursor {
    /// Advance to the next entry, or `Ok(None)` when the scan is exhausted.
    fn next_entry(&mut self) -> StoreResult<Option<StateEntry>>;
}
