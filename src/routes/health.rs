// src/routes/health.rs
//! API health check endpoint for the WattWatch backend.
//!
//! Defines the `/health` route used by container orchestrators and CI to
//! verify the service is up. Exports a subrouter to the gateway (`mod.rs`),
//! which merges it so `main.rs` does not need to know about individual
//! endpoints.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// JSON response body for the `/health` endpoint.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Handle `GET /health`.
///
/// Returns a static JSON object. Does not touch the catalog.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Create a subrouter containing the `/health` route.
///
/// Generic over the application state so it merges cleanly with the gateway
/// router regardless of the state type.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}
