//! # Academic Snapshots
//!
//! Non-transferable token records freezing a student's academic state at
//! a point in time: the anchored merkle root, the credential ids it
//! covers, and degree metadata. Token ids are the dense indexes of an
//! append-only arena, starting at 0.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use acad_core::{
    AcademicLevel, Address, CredentialId, FieldOfStudy, Locator, MerkleRoot, Timestamp, UidHash,
};

use crate::error::LedgerError;

/// One minted snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicSnapshot {
    pub token_id: u64,
    pub uid_hash: UidHash,
    /// The wallet the snapshot was delivered to at mint time.
    pub owner_wallet: Address,
    pub metadata_locator: Locator,
    pub merkle_root: MerkleRoot,
    pub credential_ids: Vec<CredentialId>,
    pub institution: Address,
    pub academic_level: AcademicLevel,
    pub field_of_study: FieldOfStudy,
    pub graduation_date: Timestamp,
    pub minted_at: Timestamp,
}

/// Parameters for a snapshot mint, bundled to keep call sites readable.
#[derive(Debug, Clone)]
pub struct SnapshotMint {
    pub uid_hash: UidHash,
    pub owner_wallet: Address,
    pub metadata_locator: Locator,
    pub merkle_root: MerkleRoot,
    pub credential_ids: Vec<CredentialId>,
    pub institution: Address,
    pub academic_level: AcademicLevel,
    pub field_of_study: FieldOfStudy,
    pub graduation_date: Timestamp,
}

/// The snapshot arena and its lookup indexes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotRegistry {
    tokens: Vec<AcademicSnapshot>,
    by_uid: BTreeMap<UidHash, Vec<u64>>,
    by_wallet: BTreeMap<Address, Vec<u64>>,
    minters: BTreeSet<Address>,
}

impl SnapshotRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a snapshot and return its token id.
    ///
    /// The caller has already verified authorization and that the merkle
    /// root is anchored for the UID; this method enforces field-level
    /// validity only.
    pub fn mint(&mut self, mint: SnapshotMint, at: Timestamp) -> Result<u64, LedgerError> {
        if mint.owner_wallet.is_zero() {
            return Err(LedgerError::InvalidInput(
                "owner wallet is the zero address".to_string(),
            ));
        }
        if mint.institution.is_zero() {
            return Err(LedgerError::InvalidInput(
                "institution is the zero address".to_string(),
            ));
        }
        if mint.graduation_date.is_zero() {
            return Err(LedgerError::InvalidInput(
                "graduation date is zero".to_string(),
            ));
        }
        if mint.credential_ids.is_empty() {
            return Err(LedgerError::InvalidInput(
                "no credential ids provided".to_string(),
            ));
        }

        let token_id = self.tokens.len() as u64;
        self.by_uid.entry(mint.uid_hash).or_default().push(token_id);
        self.by_wallet
            .entry(mint.owner_wallet)
            .or_default()
            .push(token_id);
        self.tokens.push(AcademicSnapshot {
            token_id,
            uid_hash: mint.uid_hash,
            owner_wallet: mint.owner_wallet,
            metadata_locator: mint.metadata_locator,
            merkle_root: mint.merkle_root,
            credential_ids: mint.credential_ids,
            institution: mint.institution,
            academic_level: mint.academic_level,
            field_of_study: mint.field_of_study,
            graduation_date: mint.graduation_date,
            minted_at: at,
        });
        Ok(token_id)
    }

    /// The snapshot behind `token_id`.
    pub fn snapshot(&self, token_id: u64) -> Result<&AcademicSnapshot, LedgerError> {
        self.tokens
            .get(token_id as usize)
            .ok_or_else(|| LedgerError::NotFound("token does not exist".to_string()))
    }

    /// Whether `token_id` covers `credential_id`.
    pub fn verify_credential(
        &self,
        token_id: u64,
        credential_id: &CredentialId,
    ) -> Result<bool, LedgerError> {
        Ok(self
            .snapshot(token_id)?
            .credential_ids
            .contains(credential_id))
    }

    /// Scan a student's snapshots in ascending token-id order for one
    /// covering `credential_id`. Returns the verdict and the first
    /// matching token id.
    pub fn verify_credential_for_uid(
        &self,
        uid_hash: &UidHash,
        credential_id: &CredentialId,
    ) -> Result<(bool, Option<u64>), LedgerError> {
        let token_ids = self.by_uid.get(uid_hash).filter(|ids| !ids.is_empty());
        let token_ids = token_ids.ok_or_else(|| {
            LedgerError::NotFound("student has no academic snapshots".to_string())
        })?;
        for &token_id in token_ids {
            if self.tokens[token_id as usize]
                .credential_ids
                .contains(credential_id)
            {
                return Ok((true, Some(token_id)));
            }
        }
        Ok((false, None))
    }

    /// Token ids minted for `uid_hash`, in mint order.
    pub fn tokens_by_uid(&self, uid_hash: &UidHash) -> Vec<u64> {
        self.by_uid.get(uid_hash).cloned().unwrap_or_default()
    }

    /// Token ids delivered to `wallet`, in mint order.
    pub fn tokens_by_wallet(&self, wallet: &Address) -> Vec<u64> {
        self.by_wallet.get(wallet).cloned().unwrap_or_default()
    }

    /// The most recently minted snapshot delivered to `wallet`.
    pub fn latest_by_wallet(&self, wallet: &Address) -> Result<&AcademicSnapshot, LedgerError> {
        let token_id = self
            .by_wallet
            .get(wallet)
            .and_then(|ids| ids.last().copied())
            .ok_or_else(|| {
                LedgerError::NotFound("student has no academic snapshots".to_string())
            })?;
        self.snapshot(token_id)
    }

    /// The merkle root frozen into `token_id`.
    pub fn merkle_root(&self, token_id: u64) -> Result<MerkleRoot, LedgerError> {
        Ok(self.snapshot(token_id)?.merkle_root)
    }

    /// Count of minted snapshots; also the next token id.
    pub fn total_supply(&self) -> u64 {
        self.tokens.len() as u64
    }

    /// Set or clear standalone mint authorization for `address`.
    pub fn set_minter(&mut self, address: Address, authorized: bool) -> bool {
        if authorized {
            self.minters.insert(address)
        } else {
            self.minters.remove(&address)
        }
    }

    /// Whether `address` holds standalone mint authorization.
    pub fn is_minter(&self, address: &Address) -> bool {
        self.minters.contains(address)
    }
}
