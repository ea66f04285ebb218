//! # Validation Error Types
//!
//! Structured errors raised when constructing domain primitives from
//! untrusted input. Uses `thiserror` for ergonomic error definitions.

use thiserror::Error;

/// Errors from validating domain primitives at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A 32-byte digest was given with the wrong hex length or non-hex
    /// characters.
    #[error("invalid {kind} hex: expected 64 hex chars, got {value:?}")]
    InvalidDigestHex {
        /// Which digest newtype rejected the input.
        kind: &'static str,
        /// The offending input.
        value: String,
    },

    /// An address was given with the wrong hex length or non-hex characters.
    #[error("invalid address hex: {0:?}")]
    InvalidAddressHex(String),

    /// An off-chain locator was empty. Locators are opaque — non-emptiness
    /// is the only property the ledger ever checks.
    #[error("empty locator")]
    EmptyLocator,

    /// A credential identifier was empty.
    #[error("empty credential id")]
    EmptyCredentialId,

    /// A data-stream update type was empty.
    #[error("empty data type")]
    EmptyDataType,

    /// An academic level was empty.
    #[error("empty academic level")]
    EmptyAcademicLevel,

    /// A field of study was empty.
    #[error("empty field of study")]
    EmptyFieldOfStudy,

    /// A recovery method string was not one of the enumerated methods.
    #[error("invalid recovery method: {0:?}")]
    InvalidRecoveryMethod(String),
}
