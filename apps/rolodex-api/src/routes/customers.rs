//! # Customer Endpoints
//!
//! ```text
//! POST   /api/customers        create customer + addresses
//! GET    /api/customers        search / paginate
//! GET    /api/customers/{id}   one customer with addresses
//! PUT    /api/customers/{id}   replace fields and address set
//! DELETE /api/customers/{id}   delete customer and addresses
//! ```
//!
//! PUT and DELETE do not check that the id exists; both report success
//! for an unknown id. GET by id does check and answers 404.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::debug;

use rolodex_core::validation::validate_customer;
use rolodex_core::{
    Customer, CustomerFilter, CustomerPage, CustomerPayload, ListParams, MessageResponse,
};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/customers - create a customer with its addresses
async fn create_customer(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CustomerPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(payload) = payload?;
    let draft = validate_customer(payload)?;

    let id = state
        .db
        .customers()
        .create(&draft.fields, &draft.addresses)
        .await?;

    Ok(Json(MessageResponse::with_id(
        "Customer created successfully",
        id,
    )))
}

/// GET /api/customers - list customers with search, address filter and pages
async fn list_customers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<CustomerPage>, ApiError> {
    let filter = CustomerFilter::from(params);
    let page = state.db.customers().list(&filter).await?;

    Ok(Json(page))
}

/// GET /api/customers/{id} - one customer with all its addresses
async fn get_customer(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Customer>, ApiError> {
    let Path(id) = path?;
    let customer = state
        .db
        .customers()
        .get_by_id(id)
        .await?
        .ok_or_else(ApiError::customer_not_found)?;

    debug!(id, addresses = customer.addresses.len(), "Fetched customer");
    Ok(Json(customer))
}

/// PUT /api/customers/{id} - replace a customer's fields and addresses
async fn update_customer(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CustomerPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = path?;
    let Json(payload) = payload?;
    let draft = validate_customer(payload)?;

    state
        .db
        .customers()
        .update(id, &draft.fields, &draft.addresses)
        .await?;

    Ok(Json(MessageResponse::new("Customer updated successfully")))
}

/// DELETE /api/customers/{id} - delete a customer and its addresses
async fn delete_customer(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = path?;
    state.db.customers().delete(id).await?;

    Ok(Json(MessageResponse::new("Customer deleted successfully")))
}

/// Customer routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/customers", get(list_customers).post(create_customer))
        .route(
            "/api/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}
