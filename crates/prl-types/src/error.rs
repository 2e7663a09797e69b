use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown status: {0}")]
    UnknownStatus(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}
