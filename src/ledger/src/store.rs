//! RocksDB-backed state store.

use crate::errors::LedgerError;
use regnet_core::errors::RegnetError;
use regnet_core::store::StateStore;
use rocksdb::{Options, DB};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

/// A wrapper around RocksDB implementing the core's [`StateStore`] contract.
///
/// Keys are the composite-key strings built by the core; values are the JSON
/// bytes the core produces. Reads return the exact last-written value for a
/// key. The mutex serializes database access across clones; transaction
/// isolation remains the surrounding runtime's responsibility.
#[derive(Clone)]
pub struct LedgerStore {
    /// The RocksDB instance
    db: Arc<Mutex<DB>>,
}

impl LedgerStore {
    /// Opens (or creates) a ledger store at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LedgerError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);

        let db = DB::open(&opts, path).map_err(|e| LedgerError::Storage(e.to_string()))?;
        info!("ledger store opened");

        Ok(Self {
            db: Arc::new(Mutex::new(db)),
        })
    }
}

impl StateStore for LedgerStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, RegnetError> {
        self.db
            .lock()
            .unwrap()
            .get(key.as_bytes())
            .map_err(|e| RegnetError::Storage(e.to_string()))
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), RegnetError> {
        self.db
            .lock()
            .unwrap()
            .put(key.as_bytes(), value)
            .map_err(|e| RegnetError::Storage(e.to_string()))
    }
}
