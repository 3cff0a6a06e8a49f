//! Durable state store for the property-registration network.
//!
//! Binds the core's [`StateStore`](regnet_core::StateStore) abstraction to
//! RocksDB. The storage engine itself is not reimplemented here; this crate
//! only maps composite keys and JSON values onto the database.

pub mod errors;
pub mod store;

pub use errors::LedgerError;
pub use store::LedgerStore;
