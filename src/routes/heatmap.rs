use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tracing::info;

use super::dashboard::StatusCounts;
use super::AppState;
use crate::{EfficiencyStatus, Room};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/heatmap", get(handler))
}

/// One tile of the heatmap grid.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HeatmapCell {
    // ---
    room_id: u32,
    name: String,
    status: EfficiencyStatus,
    label: &'static str,
    color: &'static str,
    energy_usage_today: f64,
    occupancy: u32,
    /// Room is empty and flagged as waste.
    empty_warning: bool,
}

#[derive(Debug, Serialize)]
struct HeatmapResponse {
    cells: Vec<HeatmapCell>,
    summary: StatusCounts,
}

fn to_cell(room: &Room) -> HeatmapCell {
    // ---
    let status = room.heatmap_status();

    HeatmapCell {
        room_id: room.id,
        name: room.name.clone(),
        status,
        label: status.heatmap_label(),
        color: status.color(),
        energy_usage_today: room.energy_usage_today,
        occupancy: room.occupancy,
        empty_warning: room.occupancy == 0 && status == EfficiencyStatus::Waste,
    }
}

async fn handler(State((catalog, _)): State<AppState>) -> Json<HeatmapResponse> {
    // ---
    info!("GET /heatmap");

    let cells: Vec<HeatmapCell> = catalog.rooms.iter().map(to_cell).collect();
    let summary = StatusCounts::tally(cells.iter().map(|c| c.status));

    Json(HeatmapResponse { cells, summary })
}
