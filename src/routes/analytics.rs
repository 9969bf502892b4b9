use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tracing::info;

use super::AppState;
use crate::EnergyAnalytics;

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/analytics", get(handler))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyticsResponse {
    #[serde(flatten)]
    series: EnergyAnalytics,
    /// kWh across every room today.
    total_energy_today: f64,
    /// kWh recoverable across every room.
    total_potential_savings: f64,
}

async fn handler(State((catalog, _)): State<AppState>) -> Json<AnalyticsResponse> {
    // ---
    info!("GET /analytics");

    let total_energy_today = catalog.rooms.iter().map(|r| r.energy_usage_today).sum();
    let total_potential_savings = catalog.rooms.iter().map(|r| r.potential_savings).sum();

    Json(AnalyticsResponse {
        series: catalog.analytics.clone(),
        total_energy_today,
        total_potential_savings,
    })
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::routes::test_state;

    #[test]
    fn test_analytics_totals() {
        // ---
        let Json(resp) = tokio_test::block_on(handler(State(test_state())));

        assert!((resp.total_energy_today - 30.1).abs() < 1e-9);
        assert!((resp.total_potential_savings - 14.5).abs() < 1e-9);
        assert_eq!(resp.series.energy_saved_over_time.labels.len(), 7);
        assert_eq!(resp.series.monthly_trend.data, vec![180.0, 220.0, 195.0, 282.0]);
    }
}
