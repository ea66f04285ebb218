//! Structured errors for cryptographic operations.

use thiserror::Error;

/// Errors from cryptographic operations in the Academic Credential Ledger.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Ed25519 signature verification failed.
    #[error("Ed25519 verification failed: {0}")]
    VerificationFailed(String),

    /// Invalid Ed25519 signature length.
    #[error("invalid Ed25519 signature length: expected 64 bytes, got {0}")]
    InvalidSignatureLength(usize),

    /// Invalid Ed25519 public key bytes.
    #[error("invalid Ed25519 public key: {0}")]
    InvalidPublicKey(String),
}
