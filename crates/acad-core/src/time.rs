//! Unix-seconds timestamps.
//!
//! A thin newtype so ledger records carry a copy-able, totally-ordered
//! time value. Wall-clock capture goes through [`Timestamp::now`]; the
//! ledger itself obtains timestamps via its clock capability so tests
//! stay deterministic.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A point in time as non-negative unix seconds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Construct from unix seconds.
    pub fn from_unix(secs: u64) -> Self {
        Self(secs)
    }

    /// Capture the current wall-clock time.
    pub fn now() -> Self {
        Self(Utc::now().timestamp().max(0) as u64)
    }

    /// The unix-seconds value.
    pub fn as_unix(&self) -> u64 {
        self.0
    }

    /// Whether this is the zero (unset) timestamp.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
