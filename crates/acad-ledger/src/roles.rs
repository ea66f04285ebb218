//! # Role-Based Access Control
//!
//! An explicit `address → capability set` map, checked before every
//! mutation. Authorization is never inferred from caller identity or
//! object relationships — an address either holds a role or it does not.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use acad_core::Address;

/// The capabilities an address can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Manages roles, pause state, verification mode, and contract wiring.
    Admin,
    /// Writes authority over student records: stream initialization,
    /// anchoring, recovery attestation.
    Institution,
    /// Delegated append authority over initialized data streams.
    Updater,
}

/// The authority sets shared by every ledger component.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleStore {
    grants: BTreeMap<Address, BTreeSet<Role>>,
}

impl RoleStore {
    /// An empty store — no address holds any role.
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotently grant `role` to `address`. Returns `true` if the
    /// membership changed.
    pub fn grant(&mut self, address: Address, role: Role) -> bool {
        self.grants.entry(address).or_default().insert(role)
    }

    /// Idempotently revoke `role` from `address`. Returns `true` if the
    /// membership changed.
    pub fn revoke(&mut self, address: Address, role: Role) -> bool {
        match self.grants.get_mut(&address) {
            Some(set) => {
                let removed = set.remove(&role);
                if set.is_empty() {
                    self.grants.remove(&address);
                }
                removed
            }
            None => false,
        }
    }

    /// Whether `address` holds `role`.
    pub fn has(&self, address: &Address, role: Role) -> bool {
        self.grants
            .get(address)
            .map(|set| set.contains(&role))
            .unwrap_or(false)
    }

    /// The roles currently held by `address`.
    pub fn roles_of(&self, address: &Address) -> Vec<Role> {
        self.grants
            .get(address)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }
}
