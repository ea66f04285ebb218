//! # Mock Registration Verifier
//!
//! A deterministic, transparent proof system for development and testing.
//! The "proof" is the domain-tagged SHA-256 digest binding the UID hash
//! to the institution hash; verification recomputes the digest and checks
//! equality.
//!
//! ## Security Warning
//!
//! **NOT PRIVATE.** Anyone can recompute the proof from the public
//! inputs. The mock verifier exists solely for deterministic testing and
//! for deployments that have not yet enabled the real backend.

use acad_core::{InstitutionHash, UidHash};
use acad_crypto::registration_proof_digest;

use crate::verifier::{ProofVerifier, PublicInputs, RegistrationProof, VerifyError};

/// Deterministic mock verifier: recompute the registration digest and
/// compare.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockRegistrationVerifier;

impl MockRegistrationVerifier {
    /// Produce the proof that [`MockRegistrationVerifier::verify`] will
    /// accept for the given inputs. The deterministic counterpart of a
    /// real prover.
    pub fn prove(uid_hash: &UidHash, institution_hash: &InstitutionHash) -> RegistrationProof {
        RegistrationProof {
            proof_bytes: registration_proof_digest(uid_hash, institution_hash).to_vec(),
            public_inputs: PublicInputs {
                uid_hash: *uid_hash,
                institution_hash: *institution_hash,
            },
        }
    }
}

impl ProofVerifier for MockRegistrationVerifier {
    fn verify(
        &self,
        uid_hash: &UidHash,
        institution_hash: &InstitutionHash,
        proof: &RegistrationProof,
    ) -> Result<bool, VerifyError> {
        if proof.proof_bytes.len() != 32 {
            return Err(VerifyError::MalformedProof(format!(
                "expected 32 proof bytes, got {}",
                proof.proof_bytes.len()
            )));
        }

        // The proof must commit to the same inputs the caller registered
        // under, and the digest must match.
        if proof.public_inputs.uid_hash != *uid_hash
            || proof.public_inputs.institution_hash != *institution_hash
        {
            return Ok(false);
        }

        let expected = registration_proof_digest(uid_hash, institution_hash);
        Ok(proof.proof_bytes == expected)
    }
}
