//! # Typed Ledger Events
//!
//! Every successful state transition emits exactly one event (two for
//! UID-linked snapshot minting) into the ledger's in-order event journal.
//! The journal is the observable record an API layer or indexer consumes.

use serde::{Deserialize, Serialize};

use acad_core::{
    Address, Locator, MerkleRoot, RecoveryId, RecoveryMethod, Timestamp, UidHash,
};
use acad_zkp::VerificationMode;

/// A state-transition event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    /// A new UID was registered.
    UidRegistered {
        uid_hash: UidHash,
        owner: Address,
        registered_at: Timestamp,
    },
    /// A recovery request was opened.
    RecoveryRequested {
        recovery_id: RecoveryId,
        method: RecoveryMethod,
        requested_at: Timestamp,
    },
    /// A recovery completed: UID ownership transferred.
    RecoveryCompleted {
        uid_hash: UidHash,
        old_address: Address,
        new_address: Address,
        completed_at: Timestamp,
    },
    /// A UID owner declared a recovery channel.
    RecoveryMethodConfigured {
        uid_hash: UidHash,
        method: RecoveryMethod,
    },
    /// A UID owner repointed the UID's metadata locator.
    UidMetadataUpdated { uid_hash: UidHash, locator: Locator },
    /// The Institution role was granted.
    InstitutionRoleGranted { address: Address },
    /// The Institution role was revoked.
    InstitutionRoleRevoked { address: Address },
    /// The Updater role was granted.
    UpdaterRoleGranted { address: Address },
    /// The Updater role was revoked.
    UpdaterRoleRevoked { address: Address },
    /// A data stream was initialized (`update_index` 0) or appended to
    /// (`update_index` ≥ 1).
    StudentDataUpdated {
        uid_hash: UidHash,
        update_index: u64,
        locator: Locator,
        updated_at: Timestamp,
    },
    /// A merkle root was anchored for a student.
    StudentMerkleRootAnchored {
        merkle_root: MerkleRoot,
        uid_hash: UidHash,
        institution: Address,
        credential_count: usize,
        anchored_at: Timestamp,
    },
    /// A student's wallet profile was created or updated.
    StudentProfileUpdated {
        uid_hash: UidHash,
        wallet: Address,
        updated_at: Timestamp,
    },
    /// An academic snapshot was minted.
    AcademicSnapshotCreated {
        token_id: u64,
        uid_hash: UidHash,
        merkle_root: MerkleRoot,
        minted_at: Timestamp,
    },
    /// A snapshot was linked to a UID's token index.
    UidNftCreated { token_id: u64, uid_hash: UidHash },
    /// A snapshot-minter authorization changed.
    AuthorizedMinterUpdated { address: Address, authorized: bool },
    /// The proof-verification backend was switched.
    VerificationModeChanged { mode: VerificationMode },
    /// The ledger was paused.
    Paused { by: Address },
    /// The ledger was unpaused.
    Unpaused { by: Address },
    /// External contract wiring was updated.
    ContractAddressesUpdated {
        identity_registry: Address,
        snapshot_registry: Address,
    },
}
