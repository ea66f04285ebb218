//! # Pause Semantics and Authorization Matrix
//!
//! Checks that the global pause rejects every mutating operation while
//! leaving queries and admin pause controls available, and that each
//! operation enforces its role gate before touching state.

use acad_core::{
    AcademicLevel, Address, CredentialId, DataHash, DataType, FieldOfStudy, InstitutionHash,
    Locator, MerkleRoot, Timestamp, UidHash,
};
use acad_ledger::{CredentialLedger, LedgerError, Role, SnapshotMint};
use acad_zkp::MockRegistrationVerifier;

fn addr(fill: u8) -> Address {
    Address::from_bytes([fill; 32])
}

fn uid(fill: u8) -> UidHash {
    UidHash::from_bytes([fill; 32])
}

const ADMIN: u8 = 0xAA;
const INSTITUTION: u8 = 0x55;

fn ledger_with_student() -> CredentialLedger {
    let mut ledger = CredentialLedger::new(addr(ADMIN)).unwrap();
    ledger
        .grant_role(addr(ADMIN), addr(INSTITUTION), Role::Institution)
        .unwrap();
    let inst = InstitutionHash::from_bytes([0x11; 32]);
    let proof = MockRegistrationVerifier::prove(&uid(1), &inst);
    ledger.register_uid(addr(1), uid(1), inst, &proof).unwrap();
    ledger
}

#[test]
fn pause_rejects_every_mutation_category() {
    let mut ledger = ledger_with_student();
    ledger.pause(addr(ADMIN)).unwrap();

    let inst = InstitutionHash::from_bytes([0x11; 32]);
    let proof = MockRegistrationVerifier::prove(&uid(2), &inst);
    assert_eq!(
        ledger.register_uid(addr(2), uid(2), inst, &proof).unwrap_err(),
        LedgerError::Paused
    );
    assert_eq!(
        ledger
            .grant_role(addr(ADMIN), addr(9), Role::Updater)
            .unwrap_err(),
        LedgerError::Paused
    );
    assert_eq!(
        ledger
            .initialize_student_data_stream(
                addr(INSTITUTION),
                uid(1),
                Locator::new("ipfs://s/0").unwrap()
            )
            .unwrap_err(),
        LedgerError::Paused
    );
    assert_eq!(
        ledger
            .update_student_data(
                addr(INSTITUTION),
                uid(1),
                DataType::new("grade").unwrap(),
                Locator::new("ipfs://s/1").unwrap(),
                DataHash::ZERO,
                DataHash::from_bytes([1; 32]),
            )
            .unwrap_err(),
        LedgerError::Paused
    );
    assert_eq!(
        ledger
            .anchor_student_merkle_root(
                addr(INSTITUTION),
                MerkleRoot::from_bytes([7; 32]),
                uid(1),
                Locator::new("ipfs://tree").unwrap(),
                vec![CredentialId::new("cred-001").unwrap()],
            )
            .unwrap_err(),
        LedgerError::Paused
    );
    assert_eq!(
        ledger
            .update_student_wallet(addr(1), uid(1), addr(3))
            .unwrap_err(),
        LedgerError::Paused
    );
    assert_eq!(
        ledger
            .set_authorized_minter(addr(ADMIN), addr(9), true)
            .unwrap_err(),
        LedgerError::Paused
    );

    // Queries stay open while paused.
    assert!(ledger.is_paused());
    assert!(ledger.is_uid_registered(&uid(1)));
    assert!(ledger.is_authorized_institution(&addr(INSTITUTION)));
}

#[test]
fn unpause_restores_service() {
    let mut ledger = ledger_with_student();
    ledger.pause(addr(ADMIN)).unwrap();
    ledger.unpause(addr(ADMIN)).unwrap();
    ledger
        .initialize_student_data_stream(
            addr(INSTITUTION),
            uid(1),
            Locator::new("ipfs://s/0").unwrap(),
        )
        .unwrap();
}

#[test]
fn pause_controls_are_admin_only() {
    let mut ledger = ledger_with_student();
    assert!(matches!(
        ledger.pause(addr(INSTITUTION)).unwrap_err(),
        LedgerError::Unauthorized(_)
    ));
    ledger.pause(addr(ADMIN)).unwrap();
    assert!(matches!(
        ledger.unpause(addr(INSTITUTION)).unwrap_err(),
        LedgerError::Unauthorized(_)
    ));
}

#[test]
fn role_lifecycle_gates_stream_writes() {
    let mut ledger = ledger_with_student();
    ledger
        .initialize_student_data_stream(
            addr(INSTITUTION),
            uid(1),
            Locator::new("ipfs://s/0").unwrap(),
        )
        .unwrap();

    let updater = addr(0x66);
    let append = |ledger: &mut CredentialLedger, caller: Address| {
        ledger.update_student_data(
            caller,
            uid(1),
            DataType::new("grade").unwrap(),
            Locator::new("ipfs://s/next").unwrap(),
            DataHash::ZERO,
            DataHash::from_bytes([1; 32]),
        )
    };

    assert!(matches!(
        append(&mut ledger, updater).unwrap_err(),
        LedgerError::Unauthorized(_)
    ));
    ledger
        .grant_role(addr(ADMIN), updater, Role::Updater)
        .unwrap();
    append(&mut ledger, updater).unwrap();
    ledger
        .revoke_role(addr(ADMIN), updater, Role::Updater)
        .unwrap();
    assert!(matches!(
        append(&mut ledger, updater).unwrap_err(),
        LedgerError::Unauthorized(_)
    ));
}

#[test]
fn role_management_is_admin_only() {
    let mut ledger = ledger_with_student();
    assert!(matches!(
        ledger
            .grant_role(addr(INSTITUTION), addr(9), Role::Updater)
            .unwrap_err(),
        LedgerError::Unauthorized(_)
    ));
    assert!(matches!(
        ledger
            .grant_role(addr(ADMIN), Address::ZERO, Role::Updater)
            .unwrap_err(),
        LedgerError::InvalidInput(_)
    ));
}

#[test]
fn wallet_update_allowed_for_owner_institution_and_admin() {
    let mut ledger = ledger_with_student();
    ledger.update_student_wallet(addr(1), uid(1), addr(2)).unwrap();
    ledger
        .update_student_wallet(addr(INSTITUTION), uid(1), addr(3))
        .unwrap();
    ledger
        .update_student_wallet(addr(ADMIN), uid(1), addr(4))
        .unwrap();
    assert_eq!(
        ledger.student_profile(&uid(1)).unwrap().current_wallet,
        addr(4)
    );
    assert_eq!(
        ledger
            .update_student_wallet(addr(9), uid(1), addr(5))
            .unwrap_err(),
        LedgerError::Unauthorized("not authorized to update wallet".to_string())
    );
}

#[test]
fn minter_toggle_and_snapshot_authorization() {
    let mut ledger = ledger_with_student();
    let root = MerkleRoot::from_bytes([7; 32]);
    ledger
        .anchor_student_merkle_root(
            addr(INSTITUTION),
            root,
            uid(1),
            Locator::new("ipfs://tree").unwrap(),
            vec![CredentialId::new("cred-001").unwrap()],
        )
        .unwrap();
    let mint = SnapshotMint {
        uid_hash: uid(1),
        owner_wallet: addr(1),
        metadata_locator: Locator::new("ipfs://meta").unwrap(),
        merkle_root: root,
        credential_ids: vec![CredentialId::new("cred-001").unwrap()],
        institution: addr(INSTITUTION),
        academic_level: AcademicLevel::new("Master").unwrap(),
        field_of_study: FieldOfStudy::new("History").unwrap(),
        graduation_date: Timestamp::from_unix(1_650_000_000),
    };

    let minter = addr(0x77);
    assert!(!ledger.is_authorized_minter(&minter));
    assert!(matches!(
        ledger
            .create_academic_snapshot(minter, mint.clone())
            .unwrap_err(),
        LedgerError::Unauthorized(_)
    ));
    ledger
        .set_authorized_minter(addr(ADMIN), minter, true)
        .unwrap();
    assert!(ledger.is_authorized_minter(&minter));
    ledger.create_academic_snapshot(minter, mint).unwrap();
    ledger
        .set_authorized_minter(addr(ADMIN), minter, false)
        .unwrap();
    assert!(!ledger.is_authorized_minter(&minter));
}
