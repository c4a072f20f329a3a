//! # HTTP Server
//!
//! Router assembly and the serve loop.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Request Path                                    │
//! │                                                                         │
//! │  TcpListener (0.0.0.0:3000)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  TraceLayer ───► Router ───► handler(State<Arc<AppState>>)             │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                          Database (single pooled connection)           │
//! │                                                                         │
//! │  Ctrl+C / SIGTERM ───► drain in-flight requests ───► close pool        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use rolodex_db::Database;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Builds the application router over an opened database.
pub fn app(db: Database) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::customers::router())
        .merge(routes::addresses::router())
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(AppState::new(db)))
}

/// Serves the API until a shutdown signal arrives, then closes the pool.
pub async fn run_server(db: Database, config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    let router = app(db.clone());

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "Server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Waits for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "Ctrl+C handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, starting shutdown"),
        _ = terminate => info!("Received SIGTERM, starting shutdown"),
    }
}

// =============================================================================
// Router Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use rolodex_core::CUSTOMER_NOT_FOUND;
    use rolodex_db::DbConfig;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn setup() -> (Router, Database) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        (app(db.clone()), db)
    }

    async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header("content-type", "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    fn customer_body(first: &str, addresses: Value) -> Value {
        json!({
            "firstName": first,
            "lastName": "Lovelace",
            "phone": "555-0100",
            "email": format!("{}@example.com", first.to_lowercase()),
            "addresses": addresses,
        })
    }

    async fn customer_rows(db: &Database) -> i64 {
        db.customers().count().await.unwrap()
    }

    async fn address_rows(db: &Database) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM addresses")
            .fetch_one(db.pool())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let (router, _db) = setup().await;

        let (status, body) = send(
            &router,
            Method::POST,
            "/api/customers",
            Some(customer_body("Ada", json!(["1 Main St", "9 Oak Ave"]))),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Customer created successfully");
        let id = body["id"].as_i64().unwrap();

        let (status, body) = send(&router, Method::GET, &format!("/api/customers/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], id);
        assert_eq!(body["first_name"], "Ada");
        assert_eq!(body["last_name"], "Lovelace");
        assert_eq!(body["email"], "ada@example.com");

        let mut addresses: Vec<String> = serde_json::from_value(body["addresses"].clone()).unwrap();
        addresses.sort();
        assert_eq!(addresses, vec!["1 Main St", "9 Oak Ave"]);
    }

    #[tokio::test]
    async fn test_create_with_string_addresses_is_rejected() {
        let (router, db) = setup().await;

        let (status, body) = send(
            &router,
            Method::POST,
            "/api/customers",
            Some(customer_body("Ada", json!("1 Main St"))),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
        assert_eq!(customer_rows(&db).await, 0);
    }

    #[tokio::test]
    async fn test_create_with_missing_field_is_rejected() {
        let (router, db) = setup().await;

        let mut body = customer_body("Ada", json!([]));
        body.as_object_mut().unwrap().remove("email");

        let (status, body) = send(&router, Method::POST, "/api/customers", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "email is required");
        assert_eq!(customer_rows(&db).await, 0);
    }

    #[tokio::test]
    async fn test_create_with_invalid_json_is_rejected() {
        let (router, _db) = setup().await;

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/customers")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_replaces_addresses() {
        let (router, db) = setup().await;

        let (_, body) = send(
            &router,
            Method::POST,
            "/api/customers",
            Some(customer_body("Ada", json!(["1 Main St", "2 Elm St"]))),
        )
        .await;
        let id = body["id"].as_i64().unwrap();

        let (status, body) = send(
            &router,
            Method::PUT,
            &format!("/api/customers/{id}"),
            Some(customer_body("Grace", json!(["3 Pine Rd"]))),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Customer updated successfully");
        assert!(body.get("id").is_none());

        let (_, body) = send(&router, Method::GET, &format!("/api/customers/{id}"), None).await;
        assert_eq!(body["first_name"], "Grace");
        assert_eq!(body["addresses"], json!(["3 Pine Rd"]));
        assert_eq!(address_rows(&db).await, 1);
    }

    #[tokio::test]
    async fn test_update_with_string_addresses_is_rejected() {
        let (router, db) = setup().await;

        let (_, body) = send(
            &router,
            Method::POST,
            "/api/customers",
            Some(customer_body("Ada", json!(["1 Main St"]))),
        )
        .await;
        let id = body["id"].as_i64().unwrap();

        let (status, body) = send(
            &router,
            Method::PUT,
            &format!("/api/customers/{id}"),
            Some(customer_body("Grace", json!("3 Pine Rd"))),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (_, body) = send(&router, Method::GET, &format!("/api/customers/{id}"), None).await;
        assert_eq!(body["first_name"], "Ada");
        assert_eq!(body["addresses"], json!(["1 Main St"]));
        assert_eq!(address_rows(&db).await, 1);
    }

    #[tokio::test]
    async fn test_update_unknown_id_without_addresses_succeeds() {
        let (router, db) = setup().await;

        let (status, body) = send(
            &router,
            Method::PUT,
            "/api/customers/4242",
            Some(customer_body("Grace", json!([]))),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Customer updated successfully");
        assert_eq!(customer_rows(&db).await, 0);
    }

    #[tokio::test]
    async fn test_non_integer_id_is_json_400() {
        let (router, _db) = setup().await;

        for (method, uri) in [
            (Method::GET, "/api/customers/abc"),
            (Method::DELETE, "/api/customers/abc"),
            (Method::GET, "/api/customers/abc/addresses"),
        ] {
            let (status, body) = send(&router, method, uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(body["error"].as_str().unwrap().starts_with("Invalid customer id"));
        }
    }

    #[tokio::test]
    async fn test_delete_then_get_is_404() {
        let (router, db) = setup().await;

        let (_, body) = send(
            &router,
            Method::POST,
            "/api/customers",
            Some(customer_body("Ada", json!(["1 Main St"]))),
        )
        .await;
        let id = body["id"].as_i64().unwrap();

        let (status, body) = send(&router, Method::DELETE, &format!("/api/customers/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Customer deleted successfully");
        assert_eq!(address_rows(&db).await, 0);

        let (status, body) = send(&router, Method::GET, &format!("/api/customers/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], CUSTOMER_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_succeeds() {
        let (router, _db) = setup().await;

        let (status, body) = send(&router, Method::DELETE, "/api/customers/4242", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Customer deleted successfully");
    }

    #[tokio::test]
    async fn test_add_address_to_unknown_customer_is_404() {
        let (router, db) = setup().await;

        let (status, body) = send(
            &router,
            Method::POST,
            "/api/customers/77/addresses",
            Some(json!({ "address": "1 Main St" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], CUSTOMER_NOT_FOUND);
        assert_eq!(address_rows(&db).await, 0);
    }

    #[tokio::test]
    async fn test_add_and_list_addresses() {
        let (router, _db) = setup().await;

        let (_, body) = send(
            &router,
            Method::POST,
            "/api/customers",
            Some(customer_body("Ada", json!(["1 Main St"]))),
        )
        .await;
        let id = body["id"].as_i64().unwrap();
        let uri = format!("/api/customers/{id}/addresses");

        let (status, body) = send(&router, Method::POST, &uri, Some(json!({ "address": "9 Oak Ave" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Address added successfully");

        let (status, body) = send(&router, Method::POST, &uri, Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "address is required");

        let (status, body) = send(&router, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["1 Main St", "9 Oak Ave"]));

        let (status, _) = send(&router, Method::GET, "/api/customers/999/addresses", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_total_pages_ignores_filters() {
        let (router, _db) = setup().await;

        for i in 0..25 {
            let (status, _) = send(
                &router,
                Method::POST,
                "/api/customers",
                Some(customer_body(&format!("User{i}"), json!([]))),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, body) = send(
            &router,
            Method::GET,
            "/api/customers?page=1&pageSize=10&search=zzz-no-match",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["customers"], json!([]));
        assert_eq!(body["totalPages"], 3);

        let (_, body) = send(&router, Method::GET, "/api/customers?page=3", None).await;
        assert_eq!(body["customers"].as_array().unwrap().len(), 5);
        assert_eq!(body["totalPages"], 3);

        let (status, body) = send(
            &router,
            Method::GET,
            "/api/customers?page=4294967295&pageSize=4294967295",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["customers"], json!([]));
        assert_eq!(body["totalPages"], 1);
    }

    #[tokio::test]
    async fn test_address_filter_returns_all_addresses() {
        let (router, _db) = setup().await;

        send(
            &router,
            Method::POST,
            "/api/customers",
            Some(customer_body("Ada", json!(["1 Main St", "9 Oak Ave"]))),
        )
        .await;
        send(
            &router,
            Method::POST,
            "/api/customers",
            Some(customer_body("Grace", json!(["5 Birch Ln"]))),
        )
        .await;

        let (status, body) = send(&router, Method::GET, "/api/customers?address=Oak", None).await;
        assert_eq!(status, StatusCode::OK);

        let customers = body["customers"].as_array().unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0]["first_name"], "Ada");

        let mut addresses: Vec<String> = serde_json::from_value(customers[0]["addresses"].clone()).unwrap();
        addresses.sort();
        assert_eq!(addresses, vec!["1 Main St", "9 Oak Ave"]);
    }

    #[tokio::test]
    async fn test_health() {
        let (router, _db) = setup().await;

        let (status, body) = send(&router, Method::GET, "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok", "database": true }));
    }
}
