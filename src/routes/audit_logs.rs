use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::info;

use super::AppState;
use crate::AuditLogView;

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/audit-logs", get(handler))
}

#[derive(Debug, Default, Deserialize)]
pub struct AuditLogsQuery {
    /// Exact room name.
    room: Option<String>,
}

async fn handler(
    Query(params): Query<AuditLogsQuery>,
    State((catalog, _)): State<AppState>,
) -> Json<Vec<AuditLogView>> {
    // ---
    info!("GET /audit-logs - {:?}", params);

    let entries = catalog
        .audit_logs
        .iter()
        .filter(|e| params.room.as_ref().map_or(true, |room| &e.room == room))
        .map(|e| e.to_view())
        .collect();

    Json(entries)
}
