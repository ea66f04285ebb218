//! # Domain-Separated SHA-256 Derivations
//!
//! The only sanctioned path for producing ledger digests. Every derivation
//! prepends a distinct domain tag, so a digest computed for one purpose
//! (say, a recovery id) can never be replayed as another (say, a UID hash)
//! even when the underlying inputs are identical.
//!
//! ## Derivations
//!
//! ```text
//! uid_hash            = SHA256("acad.uid.v1"                || nid_hash || salt)
//! recovery_id         = SHA256("acad.recovery.v1"           || nid_hash || salt)
//! approval_message    = SHA256("acad.recovery-approval.v1"  || recovery_id || new_address)
//! registration_digest = SHA256("acad.registration-proof.v1" || uid_hash || institution_hash)
//! ```

use sha2::{Digest, Sha256};

use acad_core::{Address, InstitutionHash, NationalIdHash, RecoveryId, Salt, UidHash};

const UID_TAG: &[u8] = b"acad.uid.v1";
const RECOVERY_TAG: &[u8] = b"acad.recovery.v1";
const APPROVAL_TAG: &[u8] = b"acad.recovery-approval.v1";
const REGISTRATION_PROOF_TAG: &[u8] = b"acad.registration-proof.v1";

fn tagged_digest(tag: &[u8], parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(tag);
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Derive the pseudonymous UID hash from the hashed national identifier
/// and its salt commitment.
pub fn derive_uid_hash(national_id_hash: &NationalIdHash, salt: &Salt) -> UidHash {
    UidHash::from_bytes(tagged_digest(
        UID_TAG,
        &[national_id_hash.as_bytes(), salt.as_bytes()],
    ))
}

/// Derive the recovery-request key from the same two commitments.
///
/// Distinct domain tag keeps this digest disjoint from the UID hash even
/// though the inputs coincide.
pub fn derive_recovery_id(national_id_hash: &NationalIdHash, salt: &Salt) -> RecoveryId {
    RecoveryId::from_bytes(tagged_digest(
        RECOVERY_TAG,
        &[national_id_hash.as_bytes(), salt.as_bytes()],
    ))
}

/// The message an institution signs to approve transferring a recovered
/// UID to `new_address`.
pub fn recovery_approval_message(recovery_id: &RecoveryId, new_address: &Address) -> [u8; 32] {
    tagged_digest(
        APPROVAL_TAG,
        &[recovery_id.as_bytes(), new_address.as_bytes()],
    )
}

/// The digest a deterministic mock registration proof must equal: binds
/// the UID hash to the institution hash.
pub fn registration_proof_digest(
    uid_hash: &UidHash,
    institution_hash: &InstitutionHash,
) -> [u8; 32] {
    tagged_digest(
        REGISTRATION_PROOF_TAG,
        &[uid_hash.as_bytes(), institution_hash.as_bytes()],
    )
}
