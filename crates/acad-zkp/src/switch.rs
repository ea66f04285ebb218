//! # Runtime Verification-Mode Switch
//!
//! The identity registry talks to exactly one [`ProofVerifier`]; which
//! backend answers is a configuration flag an admin can flip at runtime.
//! There is a single call site — no duplicated verification logic per
//! mode.

use serde::{Deserialize, Serialize};

use acad_core::{InstitutionHash, UidHash};

use crate::groth16::Groth16RegistrationVerifier;
use crate::mock::MockRegistrationVerifier;
use crate::verifier::{ProofVerifier, RegistrationProof, VerifyError};

/// Which proof backend is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationMode {
    /// Deterministic mock verification (transparent, non-private).
    Mock,
    /// Real SNARK verification.
    Real,
}

/// A verifier that dispatches to the mock or real backend according to
/// the currently configured [`VerificationMode`].
#[derive(Debug, Clone, Copy)]
pub struct ModeSwitchedVerifier {
    mode: VerificationMode,
    mock: MockRegistrationVerifier,
    real: Groth16RegistrationVerifier,
}

impl ModeSwitchedVerifier {
    /// Create a verifier starting in the given mode.
    pub fn new(mode: VerificationMode) -> Self {
        Self {
            mode,
            mock: MockRegistrationVerifier,
            real: Groth16RegistrationVerifier,
        }
    }

    /// The currently active mode.
    pub fn mode(&self) -> VerificationMode {
        self.mode
    }

    /// Switch backends. Takes effect for the next verification.
    pub fn set_mode(&mut self, mode: VerificationMode) {
        self.mode = mode;
    }
}

impl Default for ModeSwitchedVerifier {
    fn default() -> Self {
        Self::new(VerificationMode::Mock)
    }
}

impl ProofVerifier for ModeSwitchedVerifier {
    fn verify(
        &self,
        uid_hash: &UidHash,
        institution_hash: &InstitutionHash,
        proof: &RegistrationProof,
    ) -> Result<bool, VerifyError> {
        match self.mode {
            VerificationMode::Mock => self.mock.verify(uid_hash, institution_hash, proof),
            VerificationMode::Real => self.real.verify(uid_hash, institution_hash, proof),
        }
    }
}
