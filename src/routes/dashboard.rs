use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tracing::info;

use super::AppState;
use crate::{DashboardKpis, EfficiencyStatus, RoomSummary};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/dashboard", get(handler))
}

/// Per-status room counts.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub efficient: usize,
    pub review: usize,
    pub waste: usize,
}

impl StatusCounts {
    pub fn tally(statuses: impl IntoIterator<Item = EfficiencyStatus>) -> Self {
        // ---
        let mut counts = StatusCounts::default();
        for status in statuses {
            match status {
                EfficiencyStatus::Efficient => counts.efficient += 1,
                EfficiencyStatus::Review => counts.review += 1,
                EfficiencyStatus::Waste => counts.waste += 1,
            }
        }
        counts
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardResponse {
    kpis: DashboardKpis,
    status_counts: StatusCounts,
    rooms: Vec<RoomSummary>,
}

async fn handler(State((catalog, _)): State<AppState>) -> Json<DashboardResponse> {
    // ---
    info!("GET /dashboard");

    let rooms: Vec<RoomSummary> = catalog.rooms.iter().map(|r| r.to_summary()).collect();
    let status_counts = StatusCounts::tally(rooms.iter().map(|r| r.status));

    Json(DashboardResponse {
        kpis: catalog.kpis.clone(),
        status_counts,
        rooms,
    })
}
