//! Asset types for the property-registration network.
//!
//! All assets are stored as UTF-8 JSON with the field names the network has
//! always used on the wire (`docType`, `phoneNumber`, `upgradCoins`, ...),
//! so the structs here rename to camelCase on serialization.

use crate::errors::RegnetError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque transaction timestamp, recorded verbatim into assets.
pub type Timestamp = u64;

/// Balance unit held per user (`upgradCoins`).
pub type Coins = u64;

/// Discriminator stored in every asset record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocType {
    Request,
    User,
    Property,
}

/// Registration status of a property or property request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationStatus {
    /// The property is registered and not listed for sale.
    #[serde(rename = "registered")]
    Registered,
    /// The property is listed for sale.
    #[serde(rename = "onSale")]
    OnSale,
}

impl RegistrationStatus {
    /// Parses a status from its wire form, rejecting anything outside the
    /// allowed set at the validation boundary.
    pub fn parse(value: &str) -> Result<Self, RegnetError> {
        match value {
            "registered" => Ok(RegistrationStatus::Registered),
            "onSale" => Ok(RegistrationStatus::OnSale),
            other => Err(RegnetError::InvalidStatus(other.to_string())),
        }
    }

    /// Returns the wire form of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Registered => "registered",
            RegistrationStatus::OnSale => "onSale",
        }
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pending request to register a new user, created by the user and
/// consumed (read, never deleted) by the registrar on approval.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    pub doc_type: DocType,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub ssn: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl UserRequest {
    /// Creates a new user registration request.
    pub fn new(
        name: String,
        email: String,
        phone_number: String,
        ssn: String,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            doc_type: DocType::Request,
            name,
            email,
            phone_number,
            ssn,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }
}

/// An approved user holding an `upgradCoins` balance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub doc_type: DocType,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub ssn: String,
    pub upgrad_coins: Coins,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Creates an approved user from a registration request, starting with a
    /// zero balance.
    pub fn from_request(request: &UserRequest, timestamp: Timestamp) -> Self {
        Self {
            doc_type: DocType::User,
            name: request.name.clone(),
            email: request.email.clone(),
            phone_number: request.phone_number.clone(),
            ssn: request.ssn.clone(),
            upgrad_coins: 0,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }
}

/// A pending request to register a property, owned by an existing user.
///
/// `owner` holds the composite key of the owning user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRequest {
    pub doc_type: DocType,
    pub property_id: String,
    pub price: Coins,
    pub status: RegistrationStatus,
    pub owner: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PropertyRequest {
    /// Creates a new property registration request.
    pub fn new(
        property_id: String,
        price: Coins,
        status: RegistrationStatus,
        owner: String,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            doc_type: DocType::Request,
            property_id,
            price,
            status,
            owner,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }
}

/// An approved property. `owner` always resolves to an existing user key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub doc_type: DocType,
    pub property_id: String,
    pub owner: String,
    pub price: Coins,
    pub status: RegistrationStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Property {
    /// Creates an approved property from a registration request, copying
    /// owner, price, and status.
    pub fn from_request(request: &PropertyRequest, timestamp: Timestamp) -> Self {
        Self {
            doc_type: DocType::Property,
            property_id: request.property_id.clone(),
            owner: request.owner.clone(),
            price: request.price,
            status: request.status,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User {{ name: {}, ssn: {}, upgradCoins: {} }}",
            self.name, self.ssn, self.upgrad_coins
        )
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Property {{ id: {}, price: {}, status: {} }}",
            self.property_id, self.price, self.status
        )
    }
}
