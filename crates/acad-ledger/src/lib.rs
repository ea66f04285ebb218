//! # acad-ledger
//!
//! The identity, data-stream, and credential ledger: pseudonymous UID
//! registration gated on zero-knowledge proofs, institution-attested
//! recovery, append-only per-student data streams, merkle-root anchors,
//! and non-transferable academic snapshots.
//!
//! [`CredentialLedger`] is the facade callers go through; the component
//! modules hold the state. Mutations are all-or-nothing and the whole
//! ledger can be paused by an admin.

pub mod anchor;
pub mod clock;
pub mod error;
pub mod events;
pub mod identity;
pub mod ledger;
pub mod profile;
pub mod roles;
pub mod snapshot;
pub mod stream;

pub use anchor::{AnchorStore, MerkleAnchor};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::LedgerError;
pub use events::LedgerEvent;
pub use identity::{IdentityRegistry, RecoveryRequest, UidRecord};
pub use ledger::{
    shared, ContractAddresses, CredentialLedger, SharedLedger, StudentAcademicProfile,
};
pub use profile::{ProfileStore, StudentProfile};
pub use roles::{Role, RoleStore};
pub use snapshot::{AcademicSnapshot, SnapshotMint, SnapshotRegistry};
pub use stream::{DataStreamState, DataStreamStore, DataUpdateRecord};
