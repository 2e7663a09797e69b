//! Key-value state store boundary for the Patient Request Ledger (PRL).
//!
//! The contract layer never talks to a ledger backend directly; it consumes
//! the [`StateStore`] trait defined here. This crate provides:
//! - `StateStore` / `ScanCursor` trait boundaries
//! - `InMemoryStateStore` implementation for tests and embedding
//!
//! The real store of record (consensus, replication, persistence) is an
//! external collaborator; any backend that can satisfy `StateStore` can sit
//! behind the contract.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryStateStore;
pub use traits::{ScanCursor, StateEntry, StateStore};
