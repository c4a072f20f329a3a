//! # Validation Module
//!
//! Presence and shape checks for request payloads.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (axum Json extractor)                        │
//! │  ├── Body must be JSON                                                 │
//! │  └── Text fields, when present, must be strings                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── firstName, lastName, phone, email present and non-empty           │
//! │  └── addresses present and an array of strings                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── Foreign key constraints                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only presence is checked. Formats (email, phone) are not.
//!
//! ## Usage
//! ```rust
//! use rolodex_core::types::CustomerPayload;
//! use rolodex_core::validation::validate_customer;
//!
//! let payload: CustomerPayload = serde_json::from_str(
//!     r#"{"firstName":"Ada","lastName":"L","phone":"1","email":"a@b","addresses":["1 Main St"]}"#,
//! ).unwrap();
//!
//! let draft = validate_customer(payload).unwrap();
//! assert_eq!(draft.addresses, vec!["1 Main St".to_string()]);
//! ```

use serde_json::Value;

use crate::error::{ValidationError, ValidationResult};
use crate::types::{AddressPayload, CustomerDraft, CustomerFields, CustomerPayload};

// =============================================================================
// Payload Validators
// =============================================================================

/// Validates a create/update body.
///
/// ## Rules
/// - `firstName`, `lastName`, `phone`, `email`: present and not empty
/// - `addresses`: present and an array whose elements are all strings
/// - An empty `addresses` array is valid
///
/// Fields are checked in that order and the first failure is returned.
pub fn validate_customer(payload: CustomerPayload) -> ValidationResult<CustomerDraft> {
    let fields = CustomerFields {
        first_name: required("firstName", payload.first_name)?,
        last_name: required("lastName", payload.last_name)?,
        phone: required("phone", payload.phone)?,
        email: required("email", payload.email)?,
    };

    let addresses = address_list(payload.addresses)?;

    Ok(CustomerDraft { fields, addresses })
}

/// Validates the body of an address-add request.
///
/// ## Rules
/// - `address`: present and not empty
pub fn validate_address(payload: AddressPayload) -> ValidationResult<String> {
    required("address", payload.address)
}

// =============================================================================
// Field Helpers
// =============================================================================

fn required(field: &'static str, value: Option<String>) -> ValidationResult<String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::required(field)),
    }
}

fn address_list(value: Option<Value>) -> ValidationResult<Vec<String>> {
    let items = match value {
        Some(Value::Array(items)) => items,
        Some(Value::Null) | None => return Err(ValidationError::required("addresses")),
        Some(_) => return Err(ValidationError::AddressesNotArray),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(address) => Ok(address),
            _ => Err(ValidationError::AddressNotText { index }),
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> CustomerPayload {
        serde_json::from_value(value).unwrap()
    }

    fn complete() -> Value {
        json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "phone": "555-0100",
            "email": "ada@example.com",
            "addresses": ["1 Main St", "9 Oak Ave"]
        })
    }

    #[test]
    fn test_validate_complete_payload() {
        let draft = validate_customer(payload(complete())).unwrap();

        assert_eq!(
            draft.fields,
            CustomerFields::new("Ada", "Lovelace", "555-0100", "ada@example.com")
        );
        assert_eq!(draft.addresses, vec!["1 Main St", "9 Oak Ave"]);
    }

    #[test]
    fn test_empty_addresses_is_valid() {
        let mut body = complete();
        body["addresses"] = json!([]);

        let draft = validate_customer(payload(body)).unwrap();
        assert!(draft.addresses.is_empty());
    }

    #[test]
    fn test_missing_or_empty_fields() {
        for field in ["firstName", "lastName", "phone", "email"] {
            let mut body = complete();
            body.as_object_mut().unwrap().remove(field);
            assert_eq!(
                validate_customer(payload(body)).unwrap_err(),
                ValidationError::required(field)
            );

            let mut body = complete();
            body[field] = json!("");
            assert_eq!(
                validate_customer(payload(body)).unwrap_err(),
                ValidationError::required(field)
            );
        }
    }

    #[test]
    fn test_addresses_must_be_array() {
        let mut body = complete();
        body["addresses"] = json!("1 Main St");
        assert_eq!(
            validate_customer(payload(body)).unwrap_err(),
            ValidationError::AddressesNotArray
        );

        let mut body = complete();
        body.as_object_mut().unwrap().remove("addresses");
        assert_eq!(
            validate_customer(payload(body)).unwrap_err(),
            ValidationError::required("addresses")
        );
    }

    #[test]
    fn test_address_elements_must_be_strings() {
        let mut body = complete();
        body["addresses"] = json!(["1 Main St", 42]);
        assert_eq!(
            validate_customer(payload(body)).unwrap_err(),
            ValidationError::AddressNotText { index: 1 }
        );
    }

    #[test]
    fn test_validate_address() {
        let ok = AddressPayload {
            address: Some("1 Main St".to_string()),
        };
        assert_eq!(validate_address(ok).unwrap(), "1 Main St");

        assert!(validate_address(AddressPayload::default()).is_err());
        assert!(validate_address(AddressPayload {
            address: Some(String::new())
        })
        .is_err());
    }
}
