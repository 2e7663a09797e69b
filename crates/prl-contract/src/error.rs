use prl_store::StoreError;
use prl_types::TypeError;

/// Errors produced by contract operations.
///
/// The argument-count and revoke messages are part of the external wire
/// contract and must not be reworded.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// An operation was invoked with the wrong number of arguments.
    #[error("Incorrect number of arguments. Expecting {expected}")]
    ArgumentCount { expected: usize },

    /// The dispatch surface was asked for a function it does not expose.
    #[error("Invalid contract function name: {0}")]
    UnknownFunction(String),

    /// No record is stored under the given key.
    #[error("no request found under key {0}")]
    NotFound(String),

    /// A status word outside the closed vocabulary was supplied.
    #[error("invalid status: {0}")]
    InvalidStatus(String),

    /// The stored record belongs to a different patient; no write happened.
    #[error("request {key} does not belong to the given patient; status unchanged")]
    PatientMismatch { key: String },

    /// Revocation requires the stored status to be `accepted`.
    #[error("Cannot revoke.")]
    CannotRevoke,

    /// The bytes stored under a key do not decode as a request record.
    #[error("corrupt record at {key}: {reason}")]
    CorruptRecord { key: String, reason: String },

    /// Fault propagated from the backing store.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Encoding failure from the record layer.
    #[error(transparent)]
    Type(#[from] TypeError),
}

/// Result alias for contract operations.
pub type ContractResult<T> = Result<T, ContractError>;
