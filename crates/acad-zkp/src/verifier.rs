//! # Proof Verifier Abstraction
//!
//! The [`ProofVerifier`] trait is the seam between the identity registry
//! and whichever proof system is active. Verification is a pure,
//! synchronous check performed before any state write — a verifier never
//! performs I/O.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use acad_core::{InstitutionHash, UidHash};

/// Errors from proof verification.
///
/// A malformed proof is an error; a well-formed proof that simply does
/// not verify yields `Ok(false)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// The proof artifact is structurally invalid (wrong length, missing
    /// public inputs).
    #[error("malformed proof: {0}")]
    MalformedProof(String),
}

/// The public inputs a registration proof commits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicInputs {
    /// The UID hash being registered.
    pub uid_hash: UidHash,
    /// The issuing institution's commitment.
    pub institution_hash: InstitutionHash,
}

/// A registration proof artifact: opaque proof bytes plus the public
/// inputs the prover claims they commit to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationProof {
    /// Serialized proof bytes. For the mock system this is the 32-byte
    /// registration digest; for Groth16 it will be BN254 curve points.
    pub proof_bytes: Vec<u8>,
    /// Claimed public inputs.
    pub public_inputs: PublicInputs,
}

/// Capability consumed by the identity registry: validate that `proof`
/// binds `uid_hash` to `institution_hash`.
pub trait ProofVerifier: Send + Sync {
    /// Returns `Ok(true)` when the proof verifies, `Ok(false)` when it is
    /// well-formed but does not bind the given inputs.
    fn verify(
        &self,
        uid_hash: &UidHash,
        institution_hash: &InstitutionHash,
        proof: &RegistrationProof,
    ) -> Result<bool, VerifyError>;
}
