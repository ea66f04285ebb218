//! # Append-Only Student Data Streams
//!
//! One hash-chained stream per UID. Initialization writes the stream head
//! at index 0; every append receives the next sequential index and stores
//! the caller-declared previous/current hashes verbatim. The ledger never
//! re-derives or cross-checks a declared previous hash against the stored
//! chain; chain verification is an off-ledger consumer concern.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use acad_core::{Address, DataHash, DataType, Locator, Timestamp, UidHash};

use crate::error::LedgerError;

/// The head of a student's data stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataStreamState {
    pub uid_hash: UidHash,
    /// The institution that initialized the stream.
    pub institution: Address,
    pub current_locator: Locator,
    /// Count of appended updates. Initialization leaves this at 0.
    pub total_updates: u64,
    pub is_active: bool,
    pub initialized_at: Timestamp,
}

/// One appended update. Indexes are 1-based and gapless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataUpdateRecord {
    pub uid_hash: UidHash,
    pub update_index: u64,
    pub data_type: DataType,
    pub locator: Locator,
    pub previous_hash: DataHash,
    pub current_hash: DataHash,
    pub timestamp: Timestamp,
}

/// All data streams, keyed by UID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataStreamStore {
    streams: BTreeMap<UidHash, DataStreamState>,
    updates: BTreeMap<UidHash, Vec<DataUpdateRecord>>,
}

impl DataStreamStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the stream head for `uid_hash`. Write-once per UID.
    pub fn initialize(
        &mut self,
        uid_hash: UidHash,
        institution: Address,
        initial_locator: Locator,
        at: Timestamp,
    ) -> Result<&DataStreamState, LedgerError> {
        if self.streams.contains_key(&uid_hash) {
            return Err(LedgerError::AlreadyExists(
                "data stream already initialized".to_string(),
            ));
        }
        let state = DataStreamState {
            uid_hash,
            institution,
            current_locator: initial_locator,
            total_updates: 0,
            is_active: true,
            initialized_at: at,
        };
        self.streams.insert(uid_hash, state);
        self.updates.insert(uid_hash, Vec::new());
        Ok(&self.streams[&uid_hash])
    }

    /// Append an update to an initialized stream and return its index.
    ///
    /// `previous_hash` is stored as declared. A value that does not match
    /// the prior update's `current_hash` is accepted; the gap stays
    /// visible in the stored records.
    pub fn append(
        &mut self,
        uid_hash: UidHash,
        data_type: DataType,
        locator: Locator,
        previous_hash: DataHash,
        current_hash: DataHash,
        at: Timestamp,
    ) -> Result<u64, LedgerError> {
        let state = self
            .streams
            .get_mut(&uid_hash)
            .ok_or_else(|| LedgerError::NotFound("data stream not initialized".to_string()))?;

        let update_index = state.total_updates + 1;
        state.total_updates = update_index;
        state.current_locator = locator.clone();
        self.updates.entry(uid_hash).or_default().push(DataUpdateRecord {
            uid_hash,
            update_index,
            data_type,
            locator,
            previous_hash,
            current_hash,
            timestamp: at,
        });
        Ok(update_index)
    }

    /// Whether `uid_hash` has an initialized stream.
    pub fn is_initialized(&self, uid_hash: &UidHash) -> bool {
        self.streams.contains_key(uid_hash)
    }

    /// The stream head for `uid_hash`.
    pub fn stream(&self, uid_hash: &UidHash) -> Result<&DataStreamState, LedgerError> {
        self.streams
            .get(uid_hash)
            .ok_or_else(|| LedgerError::NotFound("data stream not found".to_string()))
    }

    /// The update at 1-based `index`.
    pub fn update(&self, uid_hash: &UidHash, index: u64) -> Result<&DataUpdateRecord, LedgerError> {
        let updates = self.updates_of(uid_hash)?;
        if index == 0 || index as usize > updates.len() {
            return Err(LedgerError::NotFound("data update not found".to_string()));
        }
        Ok(&updates[index as usize - 1])
    }

    /// Updates in the inclusive 1-based range `[from, to]`.
    pub fn range(
        &self,
        uid_hash: &UidHash,
        from: u64,
        to: u64,
    ) -> Result<Vec<DataUpdateRecord>, LedgerError> {
        let updates = self.updates_of(uid_hash)?;
        if from == 0 || to < from || to as usize > updates.len() {
            return Err(LedgerError::InvalidInput("invalid range".to_string()));
        }
        Ok(updates[from as usize - 1..to as usize].to_vec())
    }

    /// All updates of `data_type`, in append order.
    pub fn by_type(
        &self,
        uid_hash: &UidHash,
        data_type: &DataType,
    ) -> Result<Vec<DataUpdateRecord>, LedgerError> {
        let updates = self.updates_of(uid_hash)?;
        Ok(updates
            .iter()
            .filter(|u| &u.data_type == data_type)
            .cloned()
            .collect())
    }

    /// The most recent update.
    pub fn latest(&self, uid_hash: &UidHash) -> Result<&DataUpdateRecord, LedgerError> {
        self.updates_of(uid_hash)?
            .last()
            .ok_or_else(|| LedgerError::NotFound("data stream has no updates".to_string()))
    }

    /// Count of appended updates.
    pub fn count(&self, uid_hash: &UidHash) -> Result<u64, LedgerError> {
        Ok(self.stream(uid_hash)?.total_updates)
    }

    fn updates_of(&self, uid_hash: &UidHash) -> Result<&Vec<DataUpdateRecord>, LedgerError> {
        self.updates
            .get(uid_hash)
            .ok_or_else(|| LedgerError::NotFound("data stream not initialized".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uid(fill: u8) -> UidHash {
        UidHash::from_bytes([fill; 32])
    }

    fn addr(fill: u8) -> Address {
        Address::from_bytes([fill; 32])
    }

    fn hash(fill: u8) -> DataHash {
        DataHash::from_bytes([fill; 32])
    }

    fn locator(s: &str) -> Locator {
        Locator::new(s).unwrap()
    }

    fn dtype(s: &str) -> DataType {
        DataType::new(s).unwrap()
    }

    fn at(unix: u64) -> Timestamp {
        Timestamp::from_unix(unix)
    }

    fn initialized() -> DataStreamStore {
        let mut store = DataStreamStore::new();
        store
            .initialize(uid(1), addr(5), locator("ipfs://stream/0"), at(100))
            .unwrap();
        store
    }

    #[test]
    fn initialize_leaves_zero_updates() {
        let store = initialized();
        let state = store.stream(&uid(1)).unwrap();
        assert_eq!(state.total_updates, 0);
        assert_eq!(state.current_locator, locator("ipfs://stream/0"));
        assert!(state.is_active);
        assert_eq!(store.count(&uid(1)).unwrap(), 0);
    }

    #[test]
    fn initialize_is_write_once() {
        let mut store = initialized();
        let err = store
            .initialize(uid(1), addr(5), locator("ipfs://again"), at(101))
            .unwrap_err();
        assert_eq!(
            err,
            LedgerError::AlreadyExists("data stream already initialized".to_string())
        );
    }

    #[test]
    fn append_assigns_sequential_indexes() {
        let mut store = initialized();
        let first = store
            .append(uid(1), dtype("grade"), locator("ipfs://u/1"), hash(0), hash(1), at(200))
            .unwrap();
        let second = store
            .append(uid(1), dtype("grade"), locator("ipfs://u/2"), hash(1), hash(2), at(201))
            .unwrap();
        assert_eq!((first, second), (1, 2));
        assert_eq!(store.count(&uid(1)).unwrap(), 2);
        assert_eq!(store.stream(&uid(1)).unwrap().current_locator, locator("ipfs://u/2"));
    }

    #[test]
    fn append_requires_initialization() {
        let mut store = DataStreamStore::new();
        let err = store
            .append(uid(1), dtype("grade"), locator("ipfs://u/1"), hash(0), hash(1), at(200))
            .unwrap_err();
        assert_eq!(
            err,
            LedgerError::NotFound("data stream not initialized".to_string())
        );
    }

    #[test]
    fn mismatched_previous_hash_is_stored_verbatim() {
        let mut store = initialized();
        store
            .append(uid(1), dtype("grade"), locator("ipfs://u/1"), hash(0), hash(1), at(200))
            .unwrap();
        // Declared previous hash does not match hash(1); the append still
        // lands and the record keeps the declared value.
        store
            .append(uid(1), dtype("grade"), locator("ipfs://u/2"), hash(9), hash(2), at(201))
            .unwrap();
        assert_eq!(store.update(&uid(1), 2).unwrap().previous_hash, hash(9));
    }

    #[test]
    fn update_lookup_by_index() {
        let mut store = initialized();
        store
            .append(uid(1), dtype("grade"), locator("ipfs://u/1"), hash(0), hash(1), at(200))
            .unwrap();
        let record = store.update(&uid(1), 1).unwrap();
        assert_eq!(record.update_index, 1);
        assert_eq!(record.current_hash, hash(1));

        assert!(store.update(&uid(1), 0).is_err());
        assert!(store.update(&uid(1), 2).is_err());
    }

    #[test]
    fn range_bounds_are_validated() {
        let mut store = initialized();
        for i in 1..=3u8 {
            store
                .append(
                    uid(1),
                    dtype("grade"),
                    locator("ipfs://u"),
                    hash(i - 1),
                    hash(i),
                    at(200 + u64::from(i)),
                )
                .unwrap();
        }
        let slice = store.range(&uid(1), 2, 3).unwrap();
        assert_eq!(slice.len(), 2);
        assert_eq!(slice[0].update_index, 2);

        for (from, to) in [(0, 2), (2, 1), (1, 4)] {
            let err = store.range(&uid(1), from, to).unwrap_err();
            assert_eq!(err, LedgerError::InvalidInput("invalid range".to_string()));
        }
    }

    #[test]
    fn by_type_filters_in_order() {
        let mut store = initialized();
        store
            .append(uid(1), dtype("grade"), locator("ipfs://u/1"), hash(0), hash(1), at(200))
            .unwrap();
        store
            .append(uid(1), dtype("attendance"), locator("ipfs://u/2"), hash(1), hash(2), at(201))
            .unwrap();
        store
            .append(uid(1), dtype("grade"), locator("ipfs://u/3"), hash(2), hash(3), at(202))
            .unwrap();
        let grades = store.by_type(&uid(1), &dtype("grade")).unwrap();
        assert_eq!(grades.len(), 2);
        assert_eq!(grades[1].update_index, 3);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn appends_stay_gapless(n in 1usize..24) {
                let mut store = initialized();
                for i in 0..n {
                    let index = store
                        .append(
                            uid(1),
                            dtype("grade"),
                            locator("ipfs://u"),
                            hash(i as u8),
                            hash(i as u8 + 1),
                            at(200 + i as u64),
                        )
                        .unwrap();
                    prop_assert_eq!(index, i as u64 + 1);
                }
                prop_assert_eq!(store.count(&uid(1)).unwrap(), n as u64);
                let all = store.range(&uid(1), 1, n as u64).unwrap();
                for (offset, record) in all.iter().enumerate() {
                    prop_assert_eq!(record.update_index, offset as u64 + 1);
                }
            }
        }
    }

    #[test]
    fn latest_requires_an_update() {
        let mut store = initialized();
        let err = store.latest(&uid(1)).unwrap_err();
        assert!(matches!(err, LedgerError::NotFound(_)));
        store
            .append(uid(1), dtype("grade"), locator("ipfs://u/1"), hash(0), hash(1), at(200))
            .unwrap();
        assert_eq!(store.latest(&uid(1)).unwrap().update_index, 1);
    }
}
