//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur in the core crate.
///
/// Every error is terminal for the invocation that raised it: no operation
/// performs a ledger write after any of its preconditions has failed.
#[derive(Error, Debug)]
pub enum RegnetError {
    /// Error when a requested key is absent from the state store.
    #[error("The asset {key} does not exist")]
    AssetNotFound {
        /// The composite key that was looked up
        key: String,
    },

    /// Error when a bank transaction id is not on the configured recharge schedule.
    #[error("Bank transaction id {0} is invalid")]
    InvalidBankTransactionId(String),

    /// Error when a registration status is outside the allowed set.
    #[error("Registration status {0} is invalid")]
    InvalidStatus(String),

    /// Error when a composite key namespace or segment violates the boundary policy.
    #[error("Invalid composite key: {0}")]
    InvalidKeySegment(String),

    /// Error when a caller who is not the owner tries to update a property.
    #[error("Caller {caller} is not the owner of property {property_id}")]
    NotOwner {
        /// The property being updated
        property_id: String,
        /// The caller-derived user key
        caller: String,
    },

    /// Error when the current owner tries to purchase their own property.
    #[error("Buyer is already the owner of property {0}")]
    SelfPurchase(String),

    /// Error when a property is not listed for sale.
    #[error("Property {0} is not listed for sale")]
    NotForSale(String),

    /// Error when a buyer's balance does not cover the property price.
    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        /// The property price
        required: u64,
        /// The buyer's current balance
        available: u64,
    },

    /// Error raised by the underlying state store.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Error when serialization or deserialization of an asset fails.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Error when reading or writing a configuration file fails.
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for RegnetError {
    fn from(err: std::io::Error) -> Self {
        RegnetError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RegnetError {
    fn from(err: serde_json::Error) -> Self {
        RegnetError::Serialization(err.to_string())
    }
}
