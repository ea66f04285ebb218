//! # acad-core — Foundational Types for the Academic Credential Ledger
//!
//! This crate provides the domain primitives shared by every other crate
//! in the workspace:
//!
//! - **Digest newtypes** ([`UidHash`], [`InstitutionHash`], [`MerkleRoot`],
//!   [`RecoveryId`], [`DataHash`]) — 32-byte SHA-256 digests, each a
//!   distinct type so a merkle root cannot be passed where a UID hash is
//!   expected.
//! - **Addresses** ([`Address`]) — 32-byte account identifiers derived
//!   from Ed25519 verifying keys.
//! - **Validated string primitives** ([`Locator`], [`CredentialId`],
//!   [`DataType`], [`AcademicLevel`], [`FieldOfStudy`]) — non-empty by
//!   construction, rejected at deserialization time when invalid.
//! - **Timestamps** ([`Timestamp`]) — unix seconds.
//!
//! ## Validation
//!
//! String-based primitives validate at construction. Digest newtypes are
//! always valid by construction from raw bytes and validate hex input in
//! `from_hex` and `Deserialize`.

pub mod error;
pub mod identity;
pub mod time;

pub use error::ValidationError;
pub use identity::{
    AcademicLevel, Address, CredentialId, DataHash, DataType, FieldOfStudy, InstitutionHash,
    Locator, MerkleRoot, NationalIdHash, RecoveryId, RecoveryMethod, Salt, UidHash,
};
pub use time::Timestamp;
