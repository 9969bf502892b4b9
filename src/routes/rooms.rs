use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::{debug, info};

use super::{ApiError, AppState};
use crate::{EfficiencyStatus, MonitoringMethod, Room, RoomDetail, RoomSummary, RoomType};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new()
        .route("/rooms", get(list_handler))
        .route("/rooms/{id}", get(detail_handler))
}

async fn list_handler(
    Query(params): Query<RoomsQuery>,
    State((catalog, config)): State<AppState>,
) -> Json<Vec<RoomSummary>> {
    // ---
    info!("GET /rooms - {:?}", params);

    let limit = params.limit.unwrap_or(config.rooms_default_limit);
    let rooms = apply_filters(&catalog.rooms, &params, limit);

    debug!("GET /rooms - Returning {} rooms", rooms.len());
    Json(rooms)
}

async fn detail_handler(
    Path(id): Path<u32>,
    State((catalog, _)): State<AppState>,
) -> Result<Json<RoomDetail>, ApiError> {
    // ---
    info!("GET /rooms/{}", id);

    catalog
        .room(id)
        .map(|room| Json(room.to_detail()))
        .ok_or_else(|| ApiError::NotFound(format!("Room {}", id)))
}

/// Query parameters for filtering the room list
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomsQuery {
    status: Option<EfficiencyStatus>,
    #[serde(rename = "type")]
    room_type: Option<RoomType>,
    monitoring_method: Option<MonitoringMethod>,
    limit: Option<u32>,
}

/// Apply query filters to the catalog rooms, matching `status` against the
/// derived efficiency status.
fn apply_filters(rooms: &[Room], params: &RoomsQuery, limit: u32) -> Vec<RoomSummary> {
    // ---
    rooms
        .iter()
        .filter(|r| params.room_type.map_or(true, |t| r.room_type == t))
        .filter(|r| {
            params
                .monitoring_method
                .map_or(true, |m| r.monitoring_method == m)
        })
        .map(Room::to_summary)
        .filter(|s| params.status.map_or(true, |st| s.status == st))
        .take(limit as usize)
        .collect()
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::routes::test_state;

    #[test]
    fn test_filter_by_derived_status() {
        // ---
        let (catalog, _) = test_state();
        let params = RoomsQuery {
            status: Some(EfficiencyStatus::Waste),
            ..Default::default()
        };

        let rooms = apply_filters(&catalog.rooms, &params, 1000);
        let ids: Vec<u32> = rooms.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 5, 8]);
    }

    #[test]
    fn test_filter_by_type_and_method() {
        // ---
        let (catalog, _) = test_state();
        let params = RoomsQuery {
            room_type: Some(RoomType::Classroom),
            monitoring_method: Some(MonitoringMethod::Camera),
            ..Default::default()
        };

        let rooms = apply_filters(&catalog.rooms, &params, 1000);
        assert_eq!(rooms.len(), 3);
        assert!(rooms.iter().all(|r| r.room_type == RoomType::Classroom));
    }

    #[test]
    fn test_limit() {
        // ---
        let (catalog, _) = test_state();
        let rooms = apply_filters(&catalog.rooms, &RoomsQuery::default(), 4);
        assert_eq!(rooms.len(), 4);
    }

    #[test]
    fn test_detail_handler_found_and_missing() {
        // ---
        let state = test_state();

        let Json(detail) =
            tokio_test::block_on(detail_handler(Path(2), State(state.clone()))).unwrap();
        assert_eq!(detail.summary.name, "Computer Lab 101");
        assert_eq!(detail.summary.status, EfficiencyStatus::Waste);
        assert_eq!(detail.hidden_waste.unwrap().hidden_waste_units, 20);

        let err = tokio_test::block_on(detail_handler(Path(404), State(state))).unwrap_err();
        assert_eq!(err, ApiError::NotFound("Room 404".to_string()));
    }

    #[test]
    fn test_list_handler_uses_configured_default_limit() {
        // ---
        let (catalog, mut config) = test_state();
        config.rooms_default_limit = 2;

        let Json(rooms) = tokio_test::block_on(list_handler(
            Query(RoomsQuery::default()),
            State((catalog, config)),
        ));
        assert_eq!(rooms.len(), 2);
    }
}
