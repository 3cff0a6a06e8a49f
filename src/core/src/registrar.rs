//! Registrar operations for the property-registration network.

use crate::context::TxContext;
use crate::errors::RegnetError;
use crate::keys;
use crate::store::{read_asset, write_asset, StateStore};
use crate::types::{Property, PropertyRequest, User, UserRequest};
use tracing::info;

/// Contract exposing the registrar's privileged operations: approving
/// pending requests into canonical `User` and `Property` assets.
///
/// Approval reads the request and writes the canonical asset; the request
/// record is kept on the ledger as an audit trail.
#[derive(Debug, Clone, Default)]
pub struct RegistrarContract;

impl RegistrarContract {
    /// Creates a registrar contract.
    pub fn new() -> Self {
        Self
    }

    /// Approves a pending user registration request, creating the `User`
    /// asset with a zero `upgradCoins` balance.
    pub fn approve_new_user<S: StateStore>(
        &self,
        store: &mut S,
        ctx: &TxContext,
        name: &str,
        ssn: &str,
    ) -> Result<User, RegnetError> {
        let request_key = keys::user_request_key(name, ssn)?;
        let user_key = keys::user_key(name, ssn)?;

        let request: UserRequest = read_asset(store, &request_key)?;
        let user = User::from_request(&request, ctx.timestamp);

        write_asset(store, &user_key, &user)?;
        info!(client = %ctx.client_id, name, "user approved");

        Ok(user)
    }

    /// Returns the user asset for the given identity.
    pub fn view_user<S: StateStore>(
        &self,
        store: &S,
        name: &str,
        ssn: &str,
    ) -> Result<User, RegnetError> {
        let user_key = keys::user_key(name, ssn)?;
        read_asset(store, &user_key)
    }

    /// Approves a pending property registration request, creating the
    /// `Property` asset with the owner, price, and status of the request.
    pub fn approve_property_registration<S: StateStore>(
        &self,
        store: &mut S,
        ctx: &TxContext,
        property_id: &str,
    ) -> Result<Property, RegnetError> {
        let request_key = keys::property_request_key(property_id)?;
        let property_key = keys::property_key(property_id)?;

        let request: PropertyRequest = read_asset(store, &request_key)?;
        let property = Property::from_request(&request, ctx.timestamp);

        write_asset(store, &property_key, &property)?;
        info!(client = %ctx.client_id, property_id, "property registration approved");

        Ok(property)
    }

    /// Returns the property asset for the given id.
    pub fn view_property<S: StateStore>(
        &self,
        store: &S,
        property_id: &str,
    ) -> Result<Property, RegnetError> {
        let property_key = keys::property_key(property_id)?;
        read_asset(store, &property_key)
    }
}
