//! User/buyer operations for the property-registration network.

use crate::config::ContractConfig;
use crate::context::TxContext;
use crate::errors::RegnetError;
use crate::keys;
use crate::store::{read_asset, write_asset, StateStore};
use crate::types::{Coins, Property, PropertyRequest, RegistrationStatus, User, UserRequest};
use tracing::{info, warn};

/// Contract exposing the user-facing operations: registration and property
/// requests, balance recharge, views, status updates, and purchases.
///
/// The contract itself is stateless; every operation validates its inputs
/// first and only then performs store writes, so a failed precondition never
/// leaves a partial mutation behind.
#[derive(Debug, Clone)]
pub struct UserContract {
    config: ContractConfig,
}

impl UserContract {
    /// Creates a user contract with the given configuration.
    pub fn new(config: ContractConfig) -> Self {
        Self { config }
    }

    /// Requests registration of a new user on the network.
    ///
    /// # Returns
    ///
    /// The created [`UserRequest`], keyed by `(name, ssn)` under the user
    /// request namespace.
    pub fn request_new_user<S: StateStore>(
        &self,
        store: &mut S,
        ctx: &TxContext,
        name: &str,
        email: &str,
        phone_number: &str,
        ssn: &str,
    ) -> Result<UserRequest, RegnetError> {
        let request_key = keys::user_request_key(name, ssn)?;

        let request = UserRequest::new(
            name.to_string(),
            email.to_string(),
            phone_number.to_string(),
            ssn.to_string(),
            ctx.timestamp,
        );

        write_asset(store, &request_key, &request)?;
        info!(client = %ctx.client_id, name, "user registration requested");

        Ok(request)
    }

    /// Recharges a user's account with `upgradCoins`.
    ///
    /// The bank transaction id must be on the configured recharge schedule;
    /// the credited amount is the schedule entry for that id.
    pub fn recharge_account<S: StateStore>(
        &self,
        store: &mut S,
        ctx: &TxContext,
        name: &str,
        ssn: &str,
        bank_transaction_id: &str,
    ) -> Result<User, RegnetError> {
        let user_key = keys::user_key(name, ssn)?;
        let mut user: User = read_asset(store, &user_key)?;

        let amount = self.config.recharge_amount(bank_transaction_id).ok_or_else(|| {
            warn!(client = %ctx.client_id, bank_transaction_id, "recharge with unknown bank transaction id");
            RegnetError::InvalidBankTransactionId(bank_transaction_id.to_string())
        })?;

        user.upgrad_coins += amount;
        user.updated_at = ctx.timestamp;
        write_asset(store, &user_key, &user)?;

        info!(client = %ctx.client_id, name, amount, balance = user.upgrad_coins, "account recharged");
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

    /// Requests registration of a property owned by an existing user.
    ///
    /// The owner must already be an approved user and the status must be one
    /// of the allowed registration statuses.
    pub fn property_registration_request<S: StateStore>(
        &self,
        store: &mut S,
        ctx: &TxContext,
        property_id: &str,
        name: &str,
        ssn: &str,
        price: Coins,
        status: &str,
    ) -> Result<PropertyRequest, RegnetError> {
        let owner_key = keys::user_key(name, ssn)?;
        let request_key = keys::property_request_key(property_id)?;

        // The owner must exist before a property can be requested under them.
        let _: User = read_asset(store, &owner_key)?;

        let status = RegistrationStatus::parse(status)?;

        let request = PropertyRequest::new(
            property_id.to_string(),
            price,
            status,
            owner_key,
            ctx.timestamp,
        );

        write_asset(store, &request_key, &request)?;
        info!(client = %ctx.client_id, property_id, %status, "property registration requested");

        Ok(request)
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

    /// Updates the registration status of a property.
    ///
    /// Only the current owner may update a property: the caller-derived user
    /// key must equal `Property.owner` exactly.
    pub fn update_property<S: StateStore>(
        &self,
        store: &mut S,
        ctx: &TxContext,
        property_id: &str,
        name: &str,
        ssn: &str,
        status: &str,
    ) -> Result<Property, RegnetError> {
        let caller_key = keys::user_key(name, ssn)?;
        let property_key = keys::property_key(property_id)?;

        let mut property: Property = read_asset(store, &property_key)?;

        if property.owner != caller_key {
            warn!(client = %ctx.client_id, property_id, "property update by non-owner rejected");
            return Err(RegnetError::NotOwner {
                property_id: property_id.to_string(),
                caller: caller_key,
            });
        }

        let status = RegistrationStatus::parse(status)?;

        property.status = status;
        property.updated_at = ctx.timestamp;
        write_asset(store, &property_key, &property)?;

        info!(client = %ctx.client_id, property_id, %status, "property status updated");
        Ok(property)
    }

    /// Purchases a property listed for sale.
    ///
    /// The buyer, property, and seller (read through `property.owner`) are
    /// fetched and every precondition checked before any write: the buyer
    /// must not already own the property, the property must be `onSale`, and
    /// the buyer's balance must cover the price. On success the price moves
    /// from buyer to seller, ownership transfers to the buyer, and the
    /// status resets to `registered`; total coins across buyer and seller
    /// are conserved.
    pub fn purchase_property<S: StateStore>(
        &self,
        store: &mut S,
        ctx: &TxContext,
        property_id: &str,
        name: &str,
        ssn: &str,
    ) -> Result<Property, RegnetError> {
        let buyer_key = keys::user_key(name, ssn)?;
        let property_key = keys::property_key(property_id)?;

        let mut buyer: User = read_asset(store, &buyer_key)?;
        let mut property: Property = read_asset(store, &property_key)?;

        // Seller key is only known once the property has been read.
        let seller_key = property.owner.clone();

        if seller_key == buyer_key {
            return Err(RegnetError::SelfPurchase(property_id.to_string()));
        }
        if property.status != RegistrationStatus::OnSale {
            return Err(RegnetError::NotForSale(property_id.to_string()));
        }
        if buyer.upgrad_coins < property.price {
            return Err(RegnetError::InsufficientBalance {
                required: property.price,
                available: buyer.upgrad_coins,
            });
        }

        let mut seller: User = read_asset(store, &seller_key)?;

        buyer.upgrad_coins -= property.price;
        buyer.updated_at = ctx.timestamp;

        seller.upgrad_coins += property.price;
        seller.updated_at = ctx.timestamp;

        property.owner = buyer_key.clone();
        property.status = RegistrationStatus::Registered;
        property.updated_at = ctx.timestamp;

        // All validations passed; emit the three writes as one unit.
        write_asset(store, &buyer_key, &buyer)?;
        write_asset(store, &seller_key, &seller)?;
        write_asset(store, &property_key, &property)?;

        info!(
            client = %ctx.client_id,
            property_id,
            price = property.price,
            buyer_balance = buyer.upgrad_coins,
            "property purchased"
        );
        Ok(property)
    }
}
