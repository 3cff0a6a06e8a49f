//! Per-invocation transaction context.

use crate::types::Timestamp;

/// Context supplied by the surrounding ledger runtime for one invocation.
///
/// The timestamp is opaque and monotonically nondecreasing across committed
/// transactions; the core records it verbatim into `createdAt`/`updatedAt`
/// and never interprets it. The client id identifies the submitting party
/// and is used for logging only.
#[derive(Debug, Clone)]
pub struct TxContext {
    /// Transaction timestamp
    pub timestamp: Timestamp,
    /// Identity of the submitting client
    pub client_id: String,
}

impl TxContext {
    /// Creates a new transaction context.
    pub fn new(timestamp: Timestamp, client_id: impl Into<String>) -> Self {
        Self {
            timestamp,
            client_id: client_id.into(),
        }
    }
}
