//! # Merkle Root Anchors
//!
//! Write-once commitments binding a merkle root to a student UID, the
//! anchoring institution, and the credential ids the tree covers. The
//! ledger stores the root as declared and never recomputes trees.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use acad_core::{Address, CredentialId, Locator, MerkleRoot, Timestamp, UidHash};

use crate::error::LedgerError;

/// One anchored merkle root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleAnchor {
    pub merkle_root: MerkleRoot,
    pub uid_hash: UidHash,
    /// The institution that performed the anchoring.
    pub institution: Address,
    pub locator: Locator,
    pub credential_ids: Vec<CredentialId>,
    pub anchored_at: Timestamp,
}

/// All anchors, keyed by merkle root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnchorStore {
    anchors: BTreeMap<MerkleRoot, MerkleAnchor>,
}

impl AnchorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor `merkle_root` for `uid_hash`. Write-once per root.
    pub fn anchor(
        &mut self,
        merkle_root: MerkleRoot,
        uid_hash: UidHash,
        institution: Address,
        locator: Locator,
        credential_ids: Vec<CredentialId>,
        at: Timestamp,
    ) -> Result<&MerkleAnchor, LedgerError> {
        if credential_ids.is_empty() {
            return Err(LedgerError::InvalidInput(
                "no credential ids provided".to_string(),
            ));
        }
        if self.anchors.contains_key(&merkle_root) {
            return Err(LedgerError::AlreadyExists(
                "merkle root already anchored".to_string(),
            ));
        }
        let anchor = MerkleAnchor {
            merkle_root,
            uid_hash,
            institution,
            locator,
            credential_ids,
            anchored_at: at,
        };
        self.anchors.insert(merkle_root, anchor);
        Ok(&self.anchors[&merkle_root])
    }

    /// Whether `merkle_root` has been anchored.
    pub fn is_anchored(&self, merkle_root: &MerkleRoot) -> bool {
        self.anchors.contains_key(merkle_root)
    }

    /// The anchor for `merkle_root`.
    pub fn get(&self, merkle_root: &MerkleRoot) -> Result<&MerkleAnchor, LedgerError> {
        self.anchors
            .get(merkle_root)
            .ok_or_else(|| LedgerError::NotFound("merkle root not anchored".to_string()))
    }
}
