//! Clock capability.
//!
//! The ledger stamps records via a [`Clock`] rather than reading the wall
//! clock directly, so tests control time deterministically.

use acad_core::Timestamp;

/// Supplies the current time to the ledger.
pub trait Clock: Send + Sync {
    /// The current time.
    fn now(&self) -> Timestamp;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// A clock pinned to a fixed instant. Test use only.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
