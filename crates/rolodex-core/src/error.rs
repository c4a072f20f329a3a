//! # Error Types
//!
//! Input validation errors for rolodex-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rolodex-core (this file)                                              │
//! │  └── ValidationError  - Missing fields, wrong body shape  → 400        │
//! │                                                                         │
//! │  rolodex-db                                                            │
//! │  └── DbError          - Not found, SQL / transaction failures          │
//! │                                                                         │
//! │  rolodex-api                                                           │
//! │  └── ApiError         - What the HTTP client sees (status + JSON)      │
//! │                                                                         │
//! │  Flow: ValidationError / DbError → ApiError → HTTP response            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Messages are static and descriptive; they reach the client unchanged.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised at the HTTP boundary before any repository call, so a request
/// that fails validation never touches the database.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing, null or an empty string.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// `addresses` was supplied but is not a JSON array.
    #[error("addresses must be an array")]
    AddressesNotArray,

    /// An element of `addresses` is not a string.
    #[error("addresses[{index}] must be a string")]
    AddressNotText { index: usize },

    /// The request body could not be read as the expected JSON shape.
    #[error("Invalid request body: {reason}")]
    MalformedBody { reason: String },
}

impl ValidationError {
    /// Creates a Required error for the given field.
    pub fn required(field: &'static str) -> Self {
        ValidationError::Required { field }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::required("firstName").to_string(),
            "firstName is required"
        );
        assert_eq!(
            ValidationError::AddressesNotArray.to_string(),
            "addresses must be an array"
        );
        assert_eq!(
            ValidationError::AddressNotText { index: 2 }.to_string(),
            "addresses[2] must be a string"
        );
    }
}
