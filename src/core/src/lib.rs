//! Core asset and transaction logic for the property-registration network.
//!
//! This crate provides the state-transition and validation logic governing
//! the four asset types of the network (user request, user, property request,
//! property), keyed by composite identifiers, including the atomic
//! multi-asset update performed during a property purchase. Ledger storage,
//! transaction ordering, and transport are external collaborators reached
//! through the [`StateStore`] abstraction.

pub mod config;
pub mod context;
pub mod errors;
pub mod keys;
pub mod registrar;
pub mod store;
pub mod types;
pub mod user;

// Re-export commonly used types
pub use config::ContractConfig;
pub use context::TxContext;
pub use errors::RegnetError;
pub use registrar::RegistrarContract;
pub use store::{MemoryStore, StateStore};
pub use types::{Coins, Property, PropertyRequest, RegistrationStatus, Timestamp, User, UserRequest};
pub use user::UserContract;
