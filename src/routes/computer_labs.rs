use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tracing::{info, warn};

use super::AppState;
use crate::{ComputerLabProfile, EfficiencyStatus, HiddenWaste, RoomSummary};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/computer-labs", get(handler))
}

/// Campus-wide computer lab figures.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct LabTotals {
    // ---
    total_labs: usize,
    total_desktops: u32,
    desktops_on: u32,
    /// Labs whose efficiency status is `waste`.
    waste_labs: usize,
    /// Sum of positive hidden-waste units across lab profiles.
    monitors_off_cpu_on: i64,
    hidden_waste_detected: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LabEntry {
    // ---
    room: RoomSummary,
    /// Hidden waste from the room's own desktop counters.
    room_hidden_waste: Option<HiddenWaste>,
    profile: Option<ComputerLabProfile>,
    /// Hidden waste from the smart-plug profile.
    profile_hidden_waste: Option<HiddenWaste>,
}

#[derive(Debug, Serialize)]
struct ComputerLabsResponse {
    totals: LabTotals,
    labs: Vec<LabEntry>,
}

async fn handler(State((catalog, _)): State<AppState>) -> Json<ComputerLabsResponse> {
    // ---
    info!("GET /computer-labs");

    let mut totals = LabTotals::default();
    let mut labs = Vec::new();

    for lab in catalog.computer_labs() {
        let summary = lab.to_summary();
        let profile = catalog.lab_profile(&lab.name).cloned();
        let profile_hidden_waste = profile.as_ref().map(ComputerLabProfile::hidden_waste);

        totals.total_labs += 1;
        if summary.status == EfficiencyStatus::Waste {
            totals.waste_labs += 1;
        }
        match (&profile, profile_hidden_waste) {
            (Some(p), Some(waste)) => {
                totals.total_desktops += p.total_desktops;
                totals.desktops_on += p.desktops_on;
                if waste.has_hidden_waste {
                    totals.monitors_off_cpu_on += waste.hidden_waste_units;
                }
            }
            _ => warn!("No smart-plug profile for lab '{}'", lab.name),
        }

        labs.push(LabEntry {
            room: summary,
            room_hidden_waste: lab.hidden_waste(),
            profile,
            profile_hidden_waste,
        });
    }
    totals.hidden_waste_detected = totals.monitors_off_cpu_on > 0;

    Json(ComputerLabsResponse { totals, labs })
}
