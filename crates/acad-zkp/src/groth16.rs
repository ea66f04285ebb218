//! # Groth16 Registration Verifier (placeholder)
//!
//! Stand-in for the real SNARK backend. Until an arkworks (`ark-groth16`
//! on BN254) integration lands, this verifier performs structural
//! validation only: the proof must be non-empty and must commit to the
//! registration inputs it is presented against. Structurally valid proofs
//! are accepted.
//!
//! ## Properties of the eventual backend
//!
//! - Proof size ~200 bytes, constant in circuit size.
//! - Constant-time verification (3 pairing checks).
//! - Circuit-specific trusted setup.
//!
//! ## Integration plan
//!
//! 1. Add `ark-groth16` and `ark-bn254` to the workspace dependencies.
//! 2. Deserialize `proof_bytes` into `ark_groth16::Proof<Bn254>`.
//! 3. Map [`PublicInputs`](crate::verifier::PublicInputs) onto field
//!    elements and run the pairing check.

use crate::verifier::{ProofVerifier, RegistrationProof, VerifyError};

use acad_core::{InstitutionHash, UidHash};

/// Placeholder Groth16 verifier. Accepts structurally valid proofs whose
/// public inputs bind the presented UID and institution hashes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Groth16RegistrationVerifier;

impl ProofVerifier for Groth16RegistrationVerifier {
    fn verify(
        &self,
        uid_hash: &UidHash,
        institution_hash: &InstitutionHash,
        proof: &RegistrationProof,
    ) -> Result<bool, VerifyError> {
        if proof.proof_bytes.is_empty() {
            return Err(VerifyError::MalformedProof(
                "empty proof bytes".to_string(),
            ));
        }

        // Public-input binding is checked here; the pairing check itself
        // arrives with the arkworks integration.
        Ok(proof.public_inputs.uid_hash == *uid_hash
            && proof.public_inputs.institution_hash == *institution_hash)
    }
}
