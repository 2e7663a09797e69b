//! Request ledger contract for the Patient Request Ledger (PRL).
//!
//! This crate is the heart of PRL. Layered on any [`prl_store::StateStore`]
//! backend, it provides:
//! - The record lifecycle: publish, seed, status update, revoke
//! - Guarded status transitions (patient identity, prior-status checks)
//! - Patient-scoped range queries with a stable JSON payload format
//! - A string-name dispatch surface for external invocation hosts
//!
//! The contract holds no state of its own; everything lives in the backing
//! store, and each operation is a self-contained read-then-write.

pub mod contract;
pub mod dispatch;
pub mod error;
pub mod seed;

pub use contract::RequestContract;
pub use dispatch::Operation;
pub use error::{ContractError, ContractResult};
