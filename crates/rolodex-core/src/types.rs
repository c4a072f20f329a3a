//! # Domain Types
//!
//! Customer and address types shared by the database and HTTP layers.
//!
//! ## Type Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Request side (camelCase)        Storage / response side (snake_case)  │
//! │  ─────────────────────────       ─────────────────────────────────────  │
//! │  CustomerPayload                 CustomerRecord  (customers row)       │
//! │   firstName, lastName,            id, first_name, last_name,           │
//! │   phone, email, addresses[]       phone, email                         │
//! │        │                                │                               │
//! │        │ validate_customer()            │ + addresses of that id       │
//! │        ▼                                ▼                               │
//! │  CustomerDraft                   Customer                              │
//! │   fields: CustomerFields          record fields + addresses: [String]  │
//! │   addresses: [String]                                                  │
//! │                                                                         │
//! │  AddressPayload { address }      CustomerPage { customers, totalPages }│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Request bodies use camelCase names; customers come back with the column
//! names of the `customers` table and addresses flattened to plain strings.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::pagination::{Pagination, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

// =============================================================================
// Customer Record
// =============================================================================

/// One row of the `customers` table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CustomerRecord {
    /// Surrogate key generated on insert.
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

/// Validated customer columns for insert and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerFields {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
}

impl CustomerFields {
    /// Creates customer fields from anything string-like.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        CustomerFields {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}

// =============================================================================
// Customer (with addresses)
// =============================================================================

/// A customer together with every address it owns.
///
/// Address order follows insertion order but callers should treat it as a
/// set; duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub addresses: Vec<String>,
}

impl Customer {
    /// Attaches an address list to a customer row.
    pub fn from_record(record: CustomerRecord, addresses: Vec<String>) -> Self {
        Customer {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            phone: record.phone,
            email: record.email,
            addresses,
        }
    }
}

// =============================================================================
// Request Payloads
// =============================================================================

/// Body of `POST /api/customers` and `PUT /api/customers/{id}`.
///
/// Every field is optional here so that a missing field is reported by
/// [`crate::validation::validate_customer`] with a descriptive message.
/// `addresses` is kept as raw JSON because its shape is part of validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub addresses: Option<serde_json::Value>,
}

/// A customer payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDraft {
    pub fields: CustomerFields,
    pub addresses: Vec<String>,
}

/// Body of `POST /api/customers/{id}/addresses`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressPayload {
    pub address: Option<String>,
}

// =============================================================================
// List Query
// =============================================================================

/// Query string of `GET /api/customers`.
///
/// Values arrive as text; anything that does not parse as a number falls
/// back to the default page or page size.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub search: Option<String>,
    pub address: Option<String>,
}

/// Search, address filter and page window for the customer list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerFilter {
    /// Substring matched against first or last name. Empty matches all.
    pub search: String,
    /// Substring matched against addresses. Empty disables the filter.
    pub address: String,
    pub pagination: Pagination,
}

impl CustomerFilter {
    /// Returns true when the address join is needed.
    pub fn has_address_filter(&self) -> bool {
        !self.address.is_empty()
    }
}

impl From<ListParams> for CustomerFilter {
    fn from(params: ListParams) -> Self {
        let page = parse_number(params.page.as_deref()).unwrap_or(DEFAULT_PAGE);
        let page_size = parse_number(params.page_size.as_deref()).unwrap_or(DEFAULT_PAGE_SIZE);

        CustomerFilter {
            search: params.search.unwrap_or_default(),
            address: params.address.unwrap_or_default(),
            pagination: Pagination::new(page, page_size),
        }
    }
}

fn parse_number(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|value| value.trim().parse().ok())
}

// =============================================================================
// Response Bodies
// =============================================================================

/// Body of `GET /api/customers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPage {
    pub customers: Vec<Customer>,
    /// Derived from the count of ALL customers, not the filtered set.
    pub total_pages: u64,
}

/// Success body for write endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MessageResponse {
    pub message: String,
    /// Set only by create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub id: Option<i64>,
}

impl MessageResponse {
    /// Creates a message-only response.
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
            id: None,
        }
    }

    /// Creates a response carrying the id of a newly created row.
    pub fn with_id(message: impl Into<String>, id: i64) -> Self {
        MessageResponse {
            message: message.into(),
            id: Some(id),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
