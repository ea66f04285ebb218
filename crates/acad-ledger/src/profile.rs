//! Student wallet profiles.
//!
//! A lightweight UID-to-current-wallet record, created lazily on the
//! first wallet update. The identity registry remains the source of
//! truth for UID ownership; the profile tracks where snapshot deliveries
//! should go when a student rotates wallets without a recovery.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use acad_core::{Address, Timestamp, UidHash};

use crate::error::LedgerError;

/// A student's wallet profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub uid_hash: UidHash,
    pub current_wallet: Address,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub last_updated: Timestamp,
}

/// Profiles keyed by UID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileStore {
    profiles: BTreeMap<UidHash, StudentProfile>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point `uid_hash` at `wallet`, creating the profile if absent.
    pub fn update_wallet(
        &mut self,
        uid_hash: UidHash,
        wallet: Address,
        at: Timestamp,
    ) -> Result<&StudentProfile, LedgerError> {
        if wallet.is_zero() {
            return Err(LedgerError::InvalidInput(
                "wallet is the zero address".to_string(),
            ));
        }
        let profile = self
            .profiles
            .entry(uid_hash)
            .or_insert_with(|| StudentProfile {
                uid_hash,
                current_wallet: wallet,
                is_active: true,
                created_at: at,
                last_updated: at,
            });
        profile.current_wallet = wallet;
        profile.last_updated = at;
        Ok(profile)
    }

    /// The profile for `uid_hash`.
    pub fn get(&self, uid_hash: &UidHash) -> Result<&StudentProfile, LedgerError> {
        self.profiles
            .get(uid_hash)
            .ok_or_else(|| LedgerError::NotFound("student profile not found".to_string()))
    }

    /// The profile wallet, if a profile exists.
    pub fn wallet_of(&self, uid_hash: &UidHash) -> Option<Address> {
        self.profiles.get(uid_hash).map(|p| p.current_wallet)
    }
}
