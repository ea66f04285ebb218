//! # Credential Ledger Facade
//!
//! The single entry point callers go through. Every mutation runs its
//! full check sequence before the first write: pause state, then caller
//! authorization, then cross-component preconditions. Component methods
//! keep their own local invariants, so a failure at any depth leaves the
//! ledger exactly as it was.
//!
//! Concurrent callers share the ledger through [`SharedLedger`]; the
//! write lock makes every mutation observably atomic.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use acad_core::{
    Address, CredentialId, DataHash, DataType, InstitutionHash, Locator, MerkleRoot,
    NationalIdHash, RecoveryMethod, Salt, UidHash,
};
use acad_crypto::{
    derive_recovery_id, derive_uid_hash, recovery_approval_message, RecoveryAttestation,
};
use acad_zkp::{ModeSwitchedVerifier, ProofVerifier, RegistrationProof, VerificationMode};

use crate::anchor::{AnchorStore, MerkleAnchor};
use crate::clock::{Clock, SystemClock};
use crate::error::LedgerError;
use crate::events::LedgerEvent;
use crate::identity::{IdentityRegistry, RecoveryRequest, UidRecord};
use crate::profile::{ProfileStore, StudentProfile};
use crate::roles::{Role, RoleStore};
use crate::snapshot::{AcademicSnapshot, SnapshotMint, SnapshotRegistry};
use crate::stream::{DataStreamState, DataStreamStore, DataUpdateRecord};

/// Deployment wiring for the external registries an indexer mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractAddresses {
    pub identity_registry: Address,
    pub snapshot_registry: Address,
}

/// The combined academic view of one student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentAcademicProfile {
    pub uid_hash: UidHash,
    pub token_ids: Vec<u64>,
    pub has_active_uid: bool,
    /// The profile wallet when one exists, else the UID owner.
    pub current_wallet: Address,
}

/// A ledger shared across threads. Mutations take the write lock.
pub type SharedLedger = Arc<RwLock<CredentialLedger>>;

/// The identity, data-stream, and credential state plus its gates.
pub struct CredentialLedger {
    paused: bool,
    roles: RoleStore,
    verifier: ModeSwitchedVerifier,
    clock: Box<dyn Clock>,
    identity: IdentityRegistry,
    streams: DataStreamStore,
    anchors: AnchorStore,
    snapshots: SnapshotRegistry,
    profiles: ProfileStore,
    contracts: Option<ContractAddresses>,
    events: Vec<LedgerEvent>,
}

impl std::fmt::Debug for CredentialLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialLedger")
            .field("paused", &self.paused)
            .field("mode", &self.verifier.mode())
            .field("events", &self.events.len())
            .finish_non_exhaustive()
    }
}

impl CredentialLedger {
    /// A ledger with `admin` holding the Admin role, the wall clock, and
    /// mock proof verification.
    pub fn new(admin: Address) -> Result<Self, LedgerError> {
        Self::with_parts(admin, ModeSwitchedVerifier::default(), Box::new(SystemClock))
    }

    /// Full-control constructor for tests and embedders.
    pub fn with_parts(
        admin: Address,
        verifier: ModeSwitchedVerifier,
        clock: Box<dyn Clock>,
    ) -> Result<Self, LedgerError> {
        if admin.is_zero() {
            return Err(LedgerError::InvalidInput(
                "admin address is the zero address".to_string(),
            ));
        }
        let mut roles = RoleStore::new();
        roles.grant(admin, Role::Admin);
        Ok(Self {
            paused: false,
            roles,
            verifier,
            clock,
            identity: IdentityRegistry::new(),
            streams: DataStreamStore::new(),
            anchors: AnchorStore::new(),
            snapshots: SnapshotRegistry::new(),
            profiles: ProfileStore::new(),
            contracts: None,
            events: Vec::new(),
        })
    }

    fn ensure_not_paused(&self) -> Result<(), LedgerError> {
        if self.paused {
            return Err(LedgerError::Paused);
        }
        Ok(())
    }

    fn ensure_role(&self, caller: &Address, role: Role, detail: &str) -> Result<(), LedgerError> {
        if !self.roles.has(caller, role) {
            return Err(LedgerError::Unauthorized(detail.to_string()));
        }
        Ok(())
    }

    fn ensure_nonzero(address: &Address, detail: &str) -> Result<(), LedgerError> {
        if address.is_zero() {
            return Err(LedgerError::InvalidInput(detail.to_string()));
        }
        Ok(())
    }

    // ---- identity -------------------------------------------------------

    /// Register `uid_hash` to `caller`, gated on a registration proof
    /// binding the UID to `institution_hash`.
    pub fn register_uid(
        &mut self,
        caller: Address,
        uid_hash: UidHash,
        institution_hash: InstitutionHash,
        proof: &RegistrationProof,
    ) -> Result<(), LedgerError> {
        self.ensure_not_paused()?;
        Self::ensure_nonzero(&caller, "caller address is the zero address")?;
        if self.identity.is_registered(&uid_hash) {
            return Err(LedgerError::AlreadyExists("UID already registered".to_string()));
        }
        let accepted = self
            .verifier
            .verify(&uid_hash, &institution_hash, proof)
            .map_err(|err| {
                warn!(uid = %uid_hash, %err, "malformed registration proof");
                LedgerError::Unauthorized(format!("invalid registration proof: {err}"))
            })?;
        if !accepted {
            warn!(uid = %uid_hash, "registration proof rejected");
            return Err(LedgerError::Unauthorized(
                "invalid registration proof".to_string(),
            ));
        }

        let now = self.clock.now();
        self.identity.register(uid_hash, institution_hash, caller, now)?;
        self.events.push(LedgerEvent::UidRegistered {
            uid_hash,
            owner: caller,
            registered_at: now,
        });
        info!(uid = %uid_hash, owner = %caller, "uid registered");
        Ok(())
    }

    /// Open a recovery request for the UID derived from the national id
    /// and salt. Returns the recovery id.
    pub fn request_recovery(
        &mut self,
        national_id_hash: &NationalIdHash,
        salt: &Salt,
        method: &str,
    ) -> Result<acad_core::RecoveryId, LedgerError> {
        self.ensure_not_paused()?;
        let method: RecoveryMethod = method.parse().map_err(LedgerError::from)?;
        let uid_hash = derive_uid_hash(national_id_hash, salt);
        if !self.identity.is_registered(&uid_hash) {
            return Err(LedgerError::NotFound("UID not registered".to_string()));
        }
        let recovery_id = derive_recovery_id(national_id_hash, salt);
        let now = self.clock.now();
        self.identity.request_recovery(recovery_id, method, now)?;
        self.events.push(LedgerEvent::RecoveryRequested {
            recovery_id,
            method,
            requested_at: now,
        });
        info!(recovery = %recovery_id, %method, "recovery requested");
        Ok(recovery_id)
    }

    /// Complete a pending recovery, transferring the derived UID to
    /// `new_address`. The attestation must sign the approval message for
    /// exactly this recovery and target address, and the signer must hold
    /// the Institution role. Returns the previous owner.
    pub fn complete_recovery(
        &mut self,
        national_id_hash: &NationalIdHash,
        salt: &Salt,
        new_address: Address,
        attestation: &RecoveryAttestation,
    ) -> Result<Address, LedgerError> {
        self.ensure_not_paused()?;
        let recovery_id = derive_recovery_id(national_id_hash, salt);
        let uid_hash = derive_uid_hash(national_id_hash, salt);
        let message = recovery_approval_message(&recovery_id, &new_address);
        let signer = attestation.recover_signer(&message).map_err(|err| {
            warn!(recovery = %recovery_id, %err, "recovery attestation failed verification");
            LedgerError::Unauthorized("invalid recovery signature".to_string())
        })?;
        if !self.roles.has(&signer, Role::Institution) {
            warn!(recovery = %recovery_id, %signer, "recovery signer lacks institution role");
            return Err(LedgerError::Unauthorized(
                "unauthorized institution".to_string(),
            ));
        }

        let now = self.clock.now();
        let old_address = self
            .identity
            .complete_recovery(recovery_id, uid_hash, new_address, now)?;
        // Keep an existing wallet profile pointed at the new owner.
        if self.profiles.wallet_of(&uid_hash).is_some() {
            self.profiles.update_wallet(uid_hash, new_address, now)?;
        }
        self.events.push(LedgerEvent::RecoveryCompleted {
            uid_hash,
            old_address,
            new_address,
            completed_at: now,
        });
        info!(uid = %uid_hash, %old_address, %new_address, "recovery completed");
        Ok(old_address)
    }

    /// Owner-only declaration of a recovery channel.
    pub fn set_recovery_method(
        &mut self,
        caller: Address,
        uid_hash: UidHash,
        method: &str,
        recovery_hash: DataHash,
    ) -> Result<(), LedgerError> {
        self.ensure_not_paused()?;
        let method: RecoveryMethod = method.parse().map_err(LedgerError::from)?;
        self.identity
            .set_recovery_method(caller, uid_hash, method, recovery_hash)?;
        self.events
            .push(LedgerEvent::RecoveryMethodConfigured { uid_hash, method });
        Ok(())
    }

    /// Owner-only repointing of the UID's metadata locator.
    pub fn update_uid_metadata(
        &mut self,
        caller: Address,
        uid_hash: UidHash,
        locator: Locator,
    ) -> Result<(), LedgerError> {
        self.ensure_not_paused()?;
        self.identity
            .update_metadata_locator(caller, uid_hash, locator.clone())?;
        self.events
            .push(LedgerEvent::UidMetadataUpdated { uid_hash, locator });
        Ok(())
    }

    // ---- roles and administration ---------------------------------------

    /// Admin-only role grant for the Institution and Updater roles. The
    /// grant is idempotent and the event fires either way.
    pub fn grant_role(
        &mut self,
        caller: Address,
        address: Address,
        role: Role,
    ) -> Result<(), LedgerError> {
        self.ensure_not_paused()?;
        self.ensure_role(&caller, Role::Admin, "caller lacks admin role")?;
        Self::ensure_nonzero(&address, "grantee address is the zero address")?;
        let event = match role {
            Role::Institution => LedgerEvent::InstitutionRoleGranted { address },
            Role::Updater => LedgerEvent::UpdaterRoleGranted { address },
            Role::Admin => {
                return Err(LedgerError::InvalidInput(
                    "admin role is fixed at construction".to_string(),
                ))
            }
        };
        self.roles.grant(address, role);
        self.events.push(event);
        info!(%address, ?role, "role granted");
        Ok(())
    }

    /// Admin-only role revocation, mirror of [`Self::grant_role`].
    pub fn revoke_role(
        &mut self,
        caller: Address,
        address: Address,
        role: Role,
    ) -> Result<(), LedgerError> {
        self.ensure_not_paused()?;
        self.ensure_role(&caller, Role::Admin, "caller lacks admin role")?;
        Self::ensure_nonzero(&address, "grantee address is the zero address")?;
        let event = match role {
            Role::Institution => LedgerEvent::InstitutionRoleRevoked { address },
            Role::Updater => LedgerEvent::UpdaterRoleRevoked { address },
            Role::Admin => {
                return Err(LedgerError::InvalidInput(
                    "admin role is fixed at construction".to_string(),
                ))
            }
        };
        self.roles.revoke(address, role);
        self.events.push(event);
        info!(%address, ?role, "role revoked");
        Ok(())
    }

    /// Admin-only switch of the proof-verification backend.
    pub fn set_verification_mode(
        &mut self,
        caller: Address,
        mode: VerificationMode,
    ) -> Result<(), LedgerError> {
        self.ensure_not_paused()?;
        self.ensure_role(&caller, Role::Admin, "caller lacks admin role")?;
        self.verifier.set_mode(mode);
        self.events.push(LedgerEvent::VerificationModeChanged { mode });
        info!(?mode, "verification mode changed");
        Ok(())
    }

    /// Admin-only pause. Rejects every later mutation until unpaused.
    pub fn pause(&mut self, caller: Address) -> Result<(), LedgerError> {
        self.ensure_role(&caller, Role::Admin, "caller lacks admin role")?;
        if self.paused {
            return Err(LedgerError::Paused);
        }
        self.paused = true;
        self.events.push(LedgerEvent::Paused { by: caller });
        info!(by = %caller, "ledger paused");
        Ok(())
    }

    /// Admin-only unpause.
    pub fn unpause(&mut self, caller: Address) -> Result<(), LedgerError> {
        self.ensure_role(&caller, Role::Admin, "caller lacks admin role")?;
        if !self.paused {
            return Err(LedgerError::InvalidInput("ledger is not paused".to_string()));
        }
        self.paused = false;
        self.events.push(LedgerEvent::Unpaused { by: caller });
        info!(by = %caller, "ledger unpaused");
        Ok(())
    }

    /// Admin-only rewiring of the external registry addresses. Allowed
    /// while paused.
    pub fn update_contract_addresses(
        &mut self,
        caller: Address,
        identity_registry: Address,
        snapshot_registry: Address,
    ) -> Result<(), LedgerError> {
        self.ensure_role(&caller, Role::Admin, "caller lacks admin role")?;
        Self::ensure_nonzero(&identity_registry, "identity registry is the zero address")?;
        Self::ensure_nonzero(&snapshot_registry, "snapshot registry is the zero address")?;
        self.contracts = Some(ContractAddresses {
            identity_registry,
            snapshot_registry,
        });
        self.events.push(LedgerEvent::ContractAddressesUpdated {
            identity_registry,
            snapshot_registry,
        });
        Ok(())
    }

    // ---- data streams -----------------------------------------------------

    /// Institution-only creation of a student's data stream.
    pub fn initialize_student_data_stream(
        &mut self,
        caller: Address,
        uid_hash: UidHash,
        initial_locator: Locator,
    ) -> Result<(), LedgerError> {
        self.ensure_not_paused()?;
        self.ensure_role(&caller, Role::Institution, "caller lacks institution role")?;
        if !self.identity.is_registered(&uid_hash) {
            return Err(LedgerError::NotFound("UID not registered".to_string()));
        }
        let now = self.clock.now();
        self.streams
            .initialize(uid_hash, caller, initial_locator.clone(), now)?;
        self.events.push(LedgerEvent::StudentDataUpdated {
            uid_hash,
            update_index: 0,
            locator: initial_locator,
            updated_at: now,
        });
        info!(uid = %uid_hash, institution = %caller, "data stream initialized");
        Ok(())
    }

    /// Append an update to a student's stream. Callers need the
    /// Institution or Updater role. Returns the 1-based update index.
    pub fn update_student_data(
        &mut self,
        caller: Address,
        uid_hash: UidHash,
        data_type: DataType,
        locator: Locator,
        previous_hash: DataHash,
        current_hash: DataHash,
    ) -> Result<u64, LedgerError> {
        self.ensure_not_paused()?;
        if !self.roles.has(&caller, Role::Institution) && !self.roles.has(&caller, Role::Updater) {
            return Err(LedgerError::Unauthorized(
                "caller lacks institution or updater role".to_string(),
            ));
        }
        let now = self.clock.now();
        let update_index = self.streams.append(
            uid_hash,
            data_type,
            locator.clone(),
            previous_hash,
            current_hash,
            now,
        )?;
        self.events.push(LedgerEvent::StudentDataUpdated {
            uid_hash,
            update_index,
            locator,
            updated_at: now,
        });
        Ok(update_index)
    }

    // ---- anchors ----------------------------------------------------------

    /// Institution-only anchoring of a merkle root for a student.
    pub fn anchor_student_merkle_root(
        &mut self,
        caller: Address,
        merkle_root: MerkleRoot,
        uid_hash: UidHash,
        locator: Locator,
        credential_ids: Vec<CredentialId>,
    ) -> Result<(), LedgerError> {
        self.ensure_not_paused()?;
        self.ensure_role(&caller, Role::Institution, "caller lacks institution role")?;
        if !self.identity.is_registered(&uid_hash) {
            return Err(LedgerError::NotFound("UID not registered".to_string()));
        }
        let now = self.clock.now();
        let credential_count = credential_ids.len();
        self.anchors
            .anchor(merkle_root, uid_hash, caller, locator, credential_ids, now)?;
        self.events.push(LedgerEvent::StudentMerkleRootAnchored {
            merkle_root,
            uid_hash,
            institution: caller,
            credential_count,
            anchored_at: now,
        });
        info!(uid = %uid_hash, root = %merkle_root, "merkle root anchored");
        Ok(())
    }

    // ---- snapshots ----------------------------------------------------------

    /// Mint an academic snapshot. Authorized callers are the UID owner,
    /// the student's profile wallet, an admin, an institution, or an
    /// explicitly authorized minter. The merkle root must already be
    /// anchored for this student. Returns the token id.
    pub fn create_academic_snapshot(
        &mut self,
        caller: Address,
        mint: SnapshotMint,
    ) -> Result<u64, LedgerError> {
        self.ensure_not_paused()?;
        let record = self.identity.record(&mint.uid_hash)?;
        let owner = record.owner;
        let profile_wallet = self.profiles.wallet_of(&mint.uid_hash);
        let authorized = self.roles.has(&caller, Role::Admin)
            || self.roles.has(&caller, Role::Institution)
            || caller == owner
            || profile_wallet == Some(caller)
            || self.snapshots.is_minter(&caller);
        if !authorized {
            return Err(LedgerError::Unauthorized(
                "not authorized to create academic snapshot".to_string(),
            ));
        }
        let anchor = self.anchors.get(&mint.merkle_root)?;
        if anchor.uid_hash != mint.uid_hash {
            return Err(LedgerError::InvalidInput(
                "merkle root doesn't belong to student".to_string(),
            ));
        }

        let uid_hash = mint.uid_hash;
        let merkle_root = mint.merkle_root;
        let now = self.clock.now();
        let token_id = self.snapshots.mint(mint, now)?;
        self.events.push(LedgerEvent::AcademicSnapshotCreated {
            token_id,
            uid_hash,
            merkle_root,
            minted_at: now,
        });
        self.events.push(LedgerEvent::UidNftCreated { token_id, uid_hash });
        info!(token_id, uid = %uid_hash, "academic snapshot created");
        Ok(token_id)
    }

    /// Admin-only toggle of standalone mint authorization.
    pub fn set_authorized_minter(
        &mut self,
        caller: Address,
        address: Address,
        authorized: bool,
    ) -> Result<(), LedgerError> {
        self.ensure_not_paused()?;
        self.ensure_role(&caller, Role::Admin, "caller lacks admin role")?;
        Self::ensure_nonzero(&address, "minter address is the zero address")?;
        self.snapshots.set_minter(address, authorized);
        self.events
            .push(LedgerEvent::AuthorizedMinterUpdated { address, authorized });
        Ok(())
    }

    // ---- profiles -----------------------------------------------------------

    /// Repoint a student's delivery wallet. Allowed for the UID owner, an
    /// institution, or an admin.
    pub fn update_student_wallet(
        &mut self,
        caller: Address,
        uid_hash: UidHash,
        new_wallet: Address,
    ) -> Result<(), LedgerError> {
        self.ensure_not_paused()?;
        let record = self.identity.record(&uid_hash)?;
        let authorized = caller == record.owner
            || self.roles.has(&caller, Role::Institution)
            || self.roles.has(&caller, Role::Admin);
        if !authorized {
            return Err(LedgerError::Unauthorized(
                "not authorized to update wallet".to_string(),
            ));
        }
        let now = self.clock.now();
        self.profiles.update_wallet(uid_hash, new_wallet, now)?;
        self.events.push(LedgerEvent::StudentProfileUpdated {
            uid_hash,
            wallet: new_wallet,
            updated_at: now,
        });
        Ok(())
    }

    // ---- queries (never pause-gated) ----------------------------------------

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn verification_mode(&self) -> VerificationMode {
        self.verifier.mode()
    }

    pub fn has_role(&self, address: &Address, role: Role) -> bool {
        self.roles.has(address, role)
    }

    pub fn is_authorized_institution(&self, address: &Address) -> bool {
        self.roles.has(address, Role::Institution)
    }

    pub fn uid_record(&self, uid_hash: &UidHash) -> Result<&UidRecord, LedgerError> {
        self.identity.record(uid_hash)
    }

    pub fn has_uid(&self, address: &Address) -> bool {
        self.identity.uid_by_address(address).is_some()
    }

    pub fn uid_by_address(&self, address: &Address) -> Option<UidHash> {
        self.identity.uid_by_address(address)
    }

    pub fn uid_record_by_address(&self, address: &Address) -> Result<&UidRecord, LedgerError> {
        self.identity.record_by_address(address)
    }

    pub fn is_uid_registered(&self, uid_hash: &UidHash) -> bool {
        self.identity.is_registered(uid_hash)
    }

    pub fn recovery_data(
        &self,
        recovery_id: &acad_core::RecoveryId,
    ) -> Result<&RecoveryRequest, LedgerError> {
        self.identity.recovery_data(recovery_id)
    }

    pub fn student_data_stream(&self, uid_hash: &UidHash) -> Result<&DataStreamState, LedgerError> {
        self.streams.stream(uid_hash)
    }

    pub fn student_data_update(
        &self,
        uid_hash: &UidHash,
        index: u64,
    ) -> Result<&DataUpdateRecord, LedgerError> {
        self.streams.update(uid_hash, index)
    }

    pub fn student_data_range(
        &self,
        uid_hash: &UidHash,
        from: u64,
        to: u64,
    ) -> Result<Vec<DataUpdateRecord>, LedgerError> {
        self.streams.range(uid_hash, from, to)
    }

    pub fn student_data_by_type(
        &self,
        uid_hash: &UidHash,
        data_type: &DataType,
    ) -> Result<Vec<DataUpdateRecord>, LedgerError> {
        self.streams.by_type(uid_hash, data_type)
    }

    pub fn latest_student_data(&self, uid_hash: &UidHash) -> Result<&DataUpdateRecord, LedgerError> {
        self.streams.latest(uid_hash)
    }

    pub fn student_data_count(&self, uid_hash: &UidHash) -> Result<u64, LedgerError> {
        self.streams.count(uid_hash)
    }

    pub fn merkle_anchor(&self, merkle_root: &MerkleRoot) -> Result<&MerkleAnchor, LedgerError> {
        self.anchors.get(merkle_root)
    }

    pub fn is_root_anchored(&self, merkle_root: &MerkleRoot) -> bool {
        self.anchors.is_anchored(merkle_root)
    }

    pub fn snapshot(&self, token_id: u64) -> Result<&AcademicSnapshot, LedgerError> {
        self.snapshots.snapshot(token_id)
    }

    /// Whether `token_id` covers `credential_id`.
    pub fn verify_credential(
        &self,
        token_id: u64,
        credential_id: &CredentialId,
    ) -> Result<bool, LedgerError> {
        self.snapshots.verify_credential(token_id, credential_id)
    }

    /// Whether any of the student's snapshots covers `credential_id`,
    /// plus the first matching token id.
    pub fn verify_student_credential(
        &self,
        uid_hash: &UidHash,
        credential_id: &CredentialId,
    ) -> Result<(bool, Option<u64>), LedgerError> {
        if !self.identity.is_registered(uid_hash) {
            return Err(LedgerError::NotFound("UID not registered".to_string()));
        }
        self.snapshots
            .verify_credential_for_uid(uid_hash, credential_id)
    }

    pub fn tokens_by_uid(&self, uid_hash: &UidHash) -> Vec<u64> {
        self.snapshots.tokens_by_uid(uid_hash)
    }

    pub fn tokens_by_wallet(&self, wallet: &Address) -> Vec<u64> {
        self.snapshots.tokens_by_wallet(wallet)
    }

    pub fn latest_snapshot_by_wallet(
        &self,
        wallet: &Address,
    ) -> Result<&AcademicSnapshot, LedgerError> {
        self.snapshots.latest_by_wallet(wallet)
    }

    pub fn snapshot_merkle_root(&self, token_id: u64) -> Result<MerkleRoot, LedgerError> {
        self.snapshots.merkle_root(token_id)
    }

    pub fn total_snapshots(&self) -> u64 {
        self.snapshots.total_supply()
    }

    pub fn is_authorized_minter(&self, address: &Address) -> bool {
        self.snapshots.is_minter(address)
    }

    pub fn student_profile(&self, uid_hash: &UidHash) -> Result<&StudentProfile, LedgerError> {
        self.profiles.get(uid_hash)
    }

    /// The combined academic view: token ids, activity, and the wallet
    /// snapshots would currently be delivered to.
    pub fn student_academic_profile(
        &self,
        uid_hash: &UidHash,
    ) -> Result<StudentAcademicProfile, LedgerError> {
        let record = self.identity.record(uid_hash)?;
        let current_wallet = self
            .profiles
            .wallet_of(uid_hash)
            .unwrap_or(record.owner);
        Ok(StudentAcademicProfile {
            uid_hash: *uid_hash,
            token_ids: self.snapshots.tokens_by_uid(uid_hash),
            has_active_uid: record.is_active,
            current_wallet,
        })
    }

    pub fn contract_addresses(&self) -> Option<ContractAddresses> {
        self.contracts
    }

    /// The in-order journal of every successful state transition.
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }
}

/// Wrap a ledger for shared use across threads.
pub fn shared(ledger: CredentialLedger) -> SharedLedger {
    Arc::new(RwLock::new(ledger))
}
