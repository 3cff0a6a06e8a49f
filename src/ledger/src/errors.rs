//! Error types for the ledger crate.

use thiserror::Error;

/// Errors that can occur when opening or operating the ledger store.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Error when the underlying database cannot be opened or accessed.
    #[error("Storage error: {0}")]
    Storage(String),
}
