//! # Address Endpoints
//!
//! ```text
//! POST /api/customers/{id}/addresses   append one address
//! GET  /api/customers/{id}/addresses   list address texts
//! ```
//!
//! Both check that the customer exists and answer 404 otherwise.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use rolodex_core::validation::validate_address;
use rolodex_core::{AddressPayload, MessageResponse};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/customers/{id}/addresses
async fn add_address(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<AddressPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = path?;
    let Json(payload) = payload?;
    let address = validate_address(payload)?;

    state.db.addresses().add(id, &address).await?;

    Ok(Json(MessageResponse::new("Address added successfully")))
}

/// GET /api/customers/{id}/addresses
async fn list_addresses(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<String>>, ApiError> {
    let Path(id) = path?;
    let addresses = state.db.addresses().list_for_customer(id).await?;

    Ok(Json(addresses))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/customers/{id}/addresses",
        get(list_addresses).post(add_address),
    )
}
