//! # Ledger Error Types
//!
//! Every failing operation maps to one of five kinds. A failure leaves
//! all ledger entities exactly as they were before the call — propagation
//! is immediate and total, and the ledger never retries on the caller's
//! behalf.

use thiserror::Error;

use acad_core::ValidationError;

/// Failure kinds for ledger operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A role, ownership, proof, or signature check failed.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Input was structurally invalid: empty string, null address, empty
    /// list, unknown enum value, out-of-range query bounds, zero date.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A write-once key already exists: duplicate registration, anchor,
    /// stream initialization, or pending recovery.
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// The referenced entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The ledger is paused; all mutating operations are rejected until
    /// an admin unpauses.
    #[error("operation rejected: ledger is paused")]
    Paused,
}

impl From<ValidationError> for LedgerError {
    fn from(err: ValidationError) -> Self {
        LedgerError::InvalidInput(err.to_string())
    }
}
