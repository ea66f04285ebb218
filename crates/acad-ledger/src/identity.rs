//! # UID Identity Registry
//!
//! Pseudonymous student identities keyed by UID hash, with a one-to-one
//! wallet mapping and institution-attested recovery requests. This module
//! holds the record state and its local invariants; role, pause, and
//! proof gating live in the facade.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use acad_core::{
    Address, DataHash, InstitutionHash, Locator, RecoveryId, RecoveryMethod, Timestamp, UidHash,
};

use crate::error::LedgerError;

/// A registered student identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UidRecord {
    pub uid_hash: UidHash,
    pub institution_hash: InstitutionHash,
    /// The wallet currently controlling this UID.
    pub owner: Address,
    pub recovery_method: Option<RecoveryMethod>,
    /// Commitment to the recovery channel, declared by the owner.
    pub recovery_hash: Option<DataHash>,
    pub metadata_locator: Option<Locator>,
    pub is_active: bool,
    pub registered_at: Timestamp,
}

/// An open or resolved recovery request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryRequest {
    pub recovery_id: RecoveryId,
    pub method: RecoveryMethod,
    /// Set once an institution attestation completed the recovery.
    pub verified: bool,
    pub requested_at: Timestamp,
}

/// UID records plus the wallet and recovery indexes over them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentityRegistry {
    records: BTreeMap<UidHash, UidRecord>,
    by_owner: BTreeMap<Address, UidHash>,
    recoveries: BTreeMap<RecoveryId, RecoveryRequest>,
}

impl IdentityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new UID owned by `owner`.
    ///
    /// Both the UID and the owner wallet are write-once: a UID hash is
    /// never re-registered, and a wallet never controls two UIDs.
    pub fn register(
        &mut self,
        uid_hash: UidHash,
        institution_hash: InstitutionHash,
        owner: Address,
        at: Timestamp,
    ) -> Result<&UidRecord, LedgerError> {
        if owner.is_zero() {
            return Err(LedgerError::InvalidInput(
                "owner address is the zero address".to_string(),
            ));
        }
        if self.records.contains_key(&uid_hash) {
            return Err(LedgerError::AlreadyExists("UID already registered".to_string()));
        }
        if self.by_owner.contains_key(&owner) {
            return Err(LedgerError::AlreadyExists(
                "address already owns a UID".to_string(),
            ));
        }

        self.by_owner.insert(owner, uid_hash);
        let record = UidRecord {
            uid_hash,
            institution_hash,
            owner,
            recovery_method: None,
            recovery_hash: None,
            metadata_locator: None,
            is_active: true,
            registered_at: at,
        };
        Ok(self.records.entry(uid_hash).or_insert(record))
    }

    /// Open a recovery request under `recovery_id`.
    ///
    /// A resolved request under the same id may be superseded; an
    /// unresolved one may not.
    pub fn request_recovery(
        &mut self,
        recovery_id: RecoveryId,
        method: RecoveryMethod,
        at: Timestamp,
    ) -> Result<&RecoveryRequest, LedgerError> {
        if let Some(existing) = self.recoveries.get(&recovery_id) {
            if !existing.verified {
                return Err(LedgerError::AlreadyExists(
                    "recovery already pending".to_string(),
                ));
            }
        }
        let request = RecoveryRequest {
            recovery_id,
            method,
            verified: false,
            requested_at: at,
        };
        self.recoveries.insert(recovery_id, request);
        Ok(&self.recoveries[&recovery_id])
    }

    /// Resolve a pending recovery by transferring `uid_hash` to
    /// `new_address`. Returns the previous owner.
    ///
    /// The caller has already authenticated the attestation; this method
    /// enforces only record-level invariants. All checks run before any
    /// write, so a failure leaves both maps untouched.
    pub fn complete_recovery(
        &mut self,
        recovery_id: RecoveryId,
        uid_hash: UidHash,
        new_address: Address,
        _at: Timestamp,
    ) -> Result<Address, LedgerError> {
        match self.recoveries.get(&recovery_id) {
            Some(request) if !request.verified => {}
            _ => {
                return Err(LedgerError::NotFound(
                    "no pending recovery request".to_string(),
                ))
            }
        }
        let old_address = match self.records.get(&uid_hash) {
            Some(record) => record.owner,
            None => return Err(LedgerError::NotFound("UID not registered".to_string())),
        };
        if new_address.is_zero() {
            return Err(LedgerError::InvalidInput(
                "new address is the zero address".to_string(),
            ));
        }
        if self.by_owner.contains_key(&new_address) {
            return Err(LedgerError::AlreadyExists(
                "address already owns a UID".to_string(),
            ));
        }

        if let Some(record) = self.records.get_mut(&uid_hash) {
            record.owner = new_address;
        }
        self.by_owner.remove(&old_address);
        self.by_owner.insert(new_address, uid_hash);
        if let Some(request) = self.recoveries.get_mut(&recovery_id) {
            request.verified = true;
        }
        Ok(old_address)
    }

    /// Record the owner's declared recovery channel.
    pub fn set_recovery_method(
        &mut self,
        caller: Address,
        uid_hash: UidHash,
        method: RecoveryMethod,
        recovery_hash: DataHash,
    ) -> Result<(), LedgerError> {
        let record = self.record_mut_owned_by(uid_hash, caller)?;
        record.recovery_method = Some(method);
        record.recovery_hash = Some(recovery_hash);
        Ok(())
    }

    /// Repoint the UID's off-ledger metadata locator.
    pub fn update_metadata_locator(
        &mut self,
        caller: Address,
        uid_hash: UidHash,
        locator: Locator,
    ) -> Result<(), LedgerError> {
        let record = self.record_mut_owned_by(uid_hash, caller)?;
        record.metadata_locator = Some(locator);
        Ok(())
    }

    fn record_mut_owned_by(
        &mut self,
        uid_hash: UidHash,
        caller: Address,
    ) -> Result<&mut UidRecord, LedgerError> {
        let record = self
            .records
            .get_mut(&uid_hash)
            .ok_or_else(|| LedgerError::NotFound("UID not registered".to_string()))?;
        if record.owner != caller {
            return Err(LedgerError::Unauthorized("not UID owner".to_string()));
        }
        Ok(record)
    }

    /// Whether `uid_hash` is registered.
    pub fn is_registered(&self, uid_hash: &UidHash) -> bool {
        self.records.contains_key(uid_hash)
    }

    /// The full record for `uid_hash`.
    pub fn record(&self, uid_hash: &UidHash) -> Result<&UidRecord, LedgerError> {
        self.records
            .get(uid_hash)
            .ok_or_else(|| LedgerError::NotFound("UID not registered".to_string()))
    }

    /// The UID currently controlled by `address`, if any.
    pub fn uid_by_address(&self, address: &Address) -> Option<UidHash> {
        self.by_owner.get(address).copied()
    }

    /// The record controlled by `address`.
    pub fn record_by_address(&self, address: &Address) -> Result<&UidRecord, LedgerError> {
        let uid = self
            .by_owner
            .get(address)
            .ok_or_else(|| LedgerError::NotFound("no UID found for address".to_string()))?;
        self.record(uid)
    }

    /// The recovery request under `recovery_id`.
    pub fn recovery_data(&self, recovery_id: &RecoveryId) -> Result<&RecoveryRequest, LedgerError> {
        self.recoveries
            .get(recovery_id)
            .ok_or_else(|| LedgerError::NotFound("recovery request not found".to_string()))
    }
}
