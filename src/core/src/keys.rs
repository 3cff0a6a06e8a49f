//! Composite key construction for ledger addressing.
//!
//! Every asset is addressed by a composite key: a namespace followed by one
//! or more ordered string segments, joined with `U+0000` delimiters in the
//! same wire format Hyperledger Fabric uses for `createCompositeKey`.
//! Owner authorization compares these keys by exact string equality, so the
//! helpers below are the only place keys are ever built.

use crate::errors::RegnetError;

/// Namespace for approved user assets.
pub const USER_NS: &str = "regnet.user";
/// Namespace for approved property assets.
pub const PROPERTY_NS: &str = "regnet.property";
/// Namespace for pending user registration requests.
pub const USER_REQUEST_NS: &str = "regnet.request.user";
/// Namespace for pending property registration requests.
pub const PROPERTY_REQUEST_NS: &str = "regnet.request.property";

/// Delimiter separating the namespace and segments of a composite key.
const DELIMITER: char = '\u{0000}';

/// Builds a deterministic composite key from a namespace and ordered segments.
///
/// The key is `U+0000` + namespace + `U+0000` + each segment followed by
/// `U+0000`. Neither the namespace nor any segment may contain the delimiter,
/// so a segment value can never re-segment into a colliding key.
pub fn composite_key(namespace: &str, segments: &[&str]) -> Result<String, RegnetError> {
    if namespace.is_empty() {
        return Err(RegnetError::InvalidKeySegment(
            "namespace must not be empty".to_string(),
        ));
    }
    if namespace.contains(DELIMITER) {
        return Err(RegnetError::InvalidKeySegment(format!(
            "namespace {:?} contains the key delimiter",
            namespace
        )));
    }

    let mut key = String::with_capacity(namespace.len() + 2);
    key.push(DELIMITER);
    key.push_str(namespace);
    key.push(DELIMITER);

    for segment in segments {
        if segment.contains(DELIMITER) {
            return Err(RegnetError::InvalidKeySegment(format!(
                "segment {:?} contains the key delimiter",
                segment
            )));
        }
        key.push_str(segment);
        key.push(DELIMITER);
    }

    Ok(key)
}

/// Key of an approved user, identified by name and ssn.
pub fn user_key(name: &str, ssn: &str) -> Result<String, RegnetError> {
    composite_key(USER_NS, &[name, ssn])
}

/// Key of a pending user registration request.
pub fn user_request_key(name: &str, ssn: &str) -> Result<String, RegnetError> {
    composite_key(USER_REQUEST_NS, &[name, ssn])
}

/// Key of an approved property.
pub fn property_key(property_id: &str) -> Result<String, RegnetError> {
    composite_key(PROPERTY_NS, &[property_id])
}

/// Key of a pending property registration request.
pub fn property_request_key(property_id: &str) -> Result<String, RegnetError> {
    composite_key(PROPERTY_REQUEST_NS, &[property_id])
}
