//! # Ed25519 Recovery Attestations
//!
//! Institutions approve UID recovery by signing the recovery-approval
//! message with an Ed25519 key. Unlike secp256k1, Ed25519 signatures do
//! not support public-key recovery, so an attestation carries the
//! verifying key alongside the signature: "recovering the signer" means
//! verifying the signature and deriving the signer's [`Address`] as the
//! SHA-256 digest of the verifying key.
//!
//! ## Invariant
//!
//! [`RecoveryAttestation::recover_signer`] returns an address only for a
//! valid signature over the exact message. The caller is still responsible
//! for checking that the recovered address holds the Institution role —
//! a valid signature from an unauthorized key proves nothing.

use ed25519_dalek::{Signer, Verifier};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use acad_core::Address;

use crate::error::CryptoError;

/// An Ed25519 signing key. Generated per institution; the corresponding
/// [`VerifyingKey`]'s address is what gets granted the Institution role.
pub struct SigningKey(ed25519_dalek::SigningKey);

impl SigningKey {
    /// Generate a fresh key from a cryptographic RNG.
    pub fn generate<R: rand_core::CryptoRngCore>(rng: &mut R) -> Self {
        Self(ed25519_dalek::SigningKey::generate(rng))
    }

    /// Construct from raw secret bytes.
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        Self(ed25519_dalek::SigningKey::from_bytes(bytes))
    }

    /// The public half.
    pub fn verifying_key(&self) -> VerifyingKey {
        VerifyingKey(self.0.verifying_key())
    }

    /// The address derived from the public half.
    pub fn address(&self) -> Address {
        self.verifying_key().to_address()
    }

    /// Sign a message.
    pub fn sign(&self, message: &[u8]) -> Ed25519Signature {
        Ed25519Signature(self.0.sign(message))
    }

    /// Sign a message and package the result as a recovery attestation.
    pub fn attest(&self, message: &[u8]) -> RecoveryAttestation {
        RecoveryAttestation {
            verifying_key: self.verifying_key(),
            signature: self.sign(message),
        }
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Secret material is never printed.
        f.debug_struct("SigningKey")
            .field("address", &self.address())
            .finish()
    }
}

/// An Ed25519 verifying (public) key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyingKey(ed25519_dalek::VerifyingKey);

impl VerifyingKey {
    /// Parse from the 32-byte compressed encoding.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, CryptoError> {
        ed25519_dalek::VerifyingKey::from_bytes(bytes)
            .map(Self)
            .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))
    }

    /// The 32-byte compressed encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// Derive the account address: `SHA256(verifying_key_bytes)`.
    pub fn to_address(&self) -> Address {
        let digest: [u8; 32] = Sha256::digest(self.0.as_bytes()).into();
        Address::from_bytes(digest)
    }

    /// Verify a signature over a message.
    pub fn verify(&self, message: &[u8], signature: &Ed25519Signature) -> Result<(), CryptoError> {
        self.0
            .verify(message, &signature.0)
            .map_err(|e| CryptoError::VerificationFailed(e.to_string()))
    }
}

/// An Ed25519 signature (64 bytes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ed25519Signature(ed25519_dalek::Signature);

impl Ed25519Signature {
    /// Parse from the 64-byte encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let arr: [u8; 64] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidSignatureLength(bytes.len()))?;
        Ok(Self(ed25519_dalek::Signature::from_bytes(&arr)))
    }

    /// The 64-byte encoding.
    pub fn to_bytes(&self) -> [u8; 64] {
        self.0.to_bytes()
    }
}

/// A signed recovery approval: verifying key + signature over the
/// recovery-approval message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryAttestation {
    /// The attesting institution's public key.
    pub verifying_key: VerifyingKey,
    /// Signature over the recovery-approval message.
    pub signature: Ed25519Signature,
}

impl RecoveryAttestation {
    /// Verify the signature over `message` and return the signer address.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::VerificationFailed`] if the signature does
    /// not verify under the carried key.
    pub fn recover_signer(&self, message: &[u8]) -> Result<Address, CryptoError> {
        self.verifying_key.verify(message, &self.signature)?;
        Ok(self.verifying_key.to_address())
    }
}
