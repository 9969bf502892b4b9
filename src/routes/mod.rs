//! Routes gateway for the WattWatch API.
//!
//! Each sibling module owns one dashboard view and exports a sub-router;
//! this gateway merges them and attaches the shared state, so `main.rs` only
//! ever sees [`router`].

use std::sync::Arc;

use axum::Router;

use crate::{Catalog, Config};

mod alerts;
mod analytics;
mod audit_logs;
mod computer_labs;
mod dashboard;
mod error;
mod health;
mod heatmap;
mod reference;
mod rooms;

pub use error::ApiError;

/// Shared, read-only state handed to every handler.
pub type AppState = (Arc<Catalog>, Config);

// ---

pub fn router(catalog: Arc<Catalog>, config: Config) -> Router {
    // ---
    Router::new()
        .merge(dashboard::router())
        .merge(rooms::router())
        .merge(heatmap::router())
        .merge(computer_labs::router())
        .merge(alerts::router())
        .merge(analytics::router())
        .merge(audit_logs::router())
        .merge(reference::router())
        .merge(health::router())
        .with_state((catalog, config))
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    // ---
    let catalog = Catalog::builtin().expect("built-in catalog");
    (Arc::new(catalog), Config::default())
}
