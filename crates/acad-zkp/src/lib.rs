//! # acad-zkp — Registration-Proof Verification
//!
//! UID registration requires a proof binding the UID hash to the issuing
//! institution's hash. This crate provides the verification capability as
//! a trait with two implementations behind a runtime mode switch:
//!
//! - [`MockRegistrationVerifier`] — deterministic, transparent SHA-256
//!   recomputation. **No zero-knowledge guarantees**; exists for
//!   development and testing.
//! - [`Groth16RegistrationVerifier`] — placeholder for the real SNARK
//!   backend. Performs structural validation until an arkworks
//!   integration lands.
//!
//! [`ModeSwitchedVerifier`] selects between the two at runtime via
//! [`VerificationMode`] — a configuration flag flipped by an admin, not a
//! second code path.

pub mod groth16;
pub mod mock;
pub mod switch;
pub mod verifier;

// Re-export primary types.
pub use groth16::Groth16RegistrationVerifier;
pub use mock::MockRegistrationVerifier;
pub use switch::{ModeSwitchedVerifier, VerificationMode};
pub use verifier::{ProofVerifier, PublicInputs, RegistrationProof, VerifyError};
