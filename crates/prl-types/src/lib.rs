//! Foundation types for the Patient Request Ledger (PRL).
//!
//! This crate provides the record type and status vocabulary shared by the
//! rest of the PRL system. Every other PRL crate depends on `prl-types`.
//!
//! # Key Types
//!
//! - [`Request`] — The provider/patient/category/status tuple the ledger manages
//! - [`Status`] — The closed status vocabulary and its transition rules
//! - [`TypeError`] — Decode and vocabulary errors

pub mod error;
pub mod record;

pub use error::TypeError;
pub use record::{Request, Status};
