//! # acad-crypto — Cryptographic Primitives for the Academic Credential Ledger
//!
//! This crate provides the cryptographic building blocks used throughout
//! the workspace:
//!
//! - **Domain-separated SHA-256 derivations** for UID hashes, recovery
//!   ids, recovery-approval messages, and registration-proof digests.
//!   Every derivation carries a distinct domain tag so digests computed
//!   for one purpose can never collide with another.
//! - **Ed25519 recovery attestations** — an institution signs the
//!   recovery-approval message; the ledger recovers the signer address
//!   (SHA-256 of the verifying key) and checks it against the
//!   institution role set.

pub mod ed25519;
pub mod error;
pub mod sha256;

// Re-export primary types.
pub use ed25519::{Ed25519Signature, RecoveryAttestation, SigningKey, VerifyingKey};
pub use error::CryptoError;
pub use sha256::{
    derive_recovery_id, derive_uid_hash, recovery_approval_message, registration_proof_digest,
};
