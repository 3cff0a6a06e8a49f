//! State store abstraction consumed by the contracts.
//!
//! The ledger itself is an external collaborator; the core only needs
//! get/put over composite keys. Values are UTF-8 JSON encodings of the asset
//! records, written whole and overwritten in place (the model has no delete
//! operation).

use crate::errors::RegnetError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;

/// Key-value access to the ledger state.
///
/// A key that has never been written, or whose value is explicitly empty,
/// reads back as `None`. Writes are durable once the surrounding transaction
/// commits; the core must not assume its own writes are visible to concurrent
/// invocations before commit.
pub trait StateStore {
    /// Returns the last-written value for a key, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, RegnetError>;

    /// Writes a value under a key, replacing any previous value.
    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), RegnetError>;
}

/// Reads an asset from the store, failing with [`RegnetError::AssetNotFound`]
/// if the key is absent.
pub fn read_asset<S, T>(store: &S, key: &str) -> Result<T, RegnetError>
where
    S: StateStore + ?Sized,
    T: DeserializeOwned,
{
    let bytes = store.get(key)?.filter(|bytes| !bytes.is_empty());
    let bytes = bytes.ok_or_else(|| RegnetError::AssetNotFound {
        key: key.to_string(),
    })?;

    let asset = serde_json::from_slice(&bytes)?;
    Ok(asset)
}

/// Serializes an asset to JSON and writes it under the given key.
pub fn write_asset<S, T>(store: &mut S, key: &str, asset: &T) -> Result<(), RegnetError>
where
    S: StateStore + ?Sized,
    T: Serialize,
{
    let bytes = serde_json::to_vec(asset)?;
    store.put(key, bytes)
}

/// In-memory state store backed by a `BTreeMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: BTreeMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of keys in the store.
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, RegnetError> {
        Ok(self.state.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), RegnetError> {
        self.state.insert(key.to_string(), value);
        Ok(())
    }
}
