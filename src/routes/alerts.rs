use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::AppState;
use crate::{Alert, Severity};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/alerts", get(handler))
}

#[derive(Debug, Default, Deserialize)]
pub struct AlertsQuery {
    severity: Option<Severity>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AlertsResponse {
    session_id: Uuid,
    /// kWh, summed over the returned alerts.
    total_estimated_waste: f64,
    alerts: Vec<Alert>,
}

async fn handler(
    Query(params): Query<AlertsQuery>,
    State((catalog, _)): State<AppState>,
) -> Json<AlertsResponse> {
    // ---
    info!("GET /alerts - {:?}", params);

    let alerts: Vec<Alert> = catalog
        .alerts
        .iter()
        .filter(|a| params.severity.map_or(true, |s| a.severity == s))
        .cloned()
        .collect();
    let total_estimated_waste = alerts.iter().map(|a| a.estimated_waste).sum();

    Json(AlertsResponse {
        session_id: catalog.session_id,
        total_estimated_waste,
        alerts,
    })
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::routes::test_state;

    #[test]
    fn test_all_alerts() {
        // ---
        let state = test_state();
        let session = state.0.session_id;
        let Json(resp) = tokio_test::block_on(handler(Query(AlertsQuery::default()), State(state)));

        assert_eq!(resp.alerts.len(), 4);
        assert!((resp.total_estimated_waste - 11.9).abs() < 1e-9);
        assert_eq!(resp.session_id, session);
    }

    #[test]
    fn test_severity_filter() {
        // ---
        let params = AlertsQuery {
            severity: Some(Severity::High),
        };
        let Json(resp) = tokio_test::block_on(handler(Query(params), State(test_state())));

        let rooms: Vec<u32> = resp.alerts.iter().map(|a| a.room_id).collect();
        assert_eq!(rooms, vec![2, 8]);
        assert!((resp.total_estimated_waste - 7.7).abs() < 1e-9);
    }
}
