//! Static reference views: privacy statements and default automation rules.

use axum::{extract::State, routing::get, Json, Router};
use tracing::info;

use super::AppState;
use crate::{PrivacyData, Rules};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new()
        .route("/privacy", get(privacy))
        .route("/rules", get(rules))
}

async fn privacy(State((catalog, _)): State<AppState>) -> Json<PrivacyData> {
    info!("GET /privacy");
    Json(catalog.privacy.clone())
}

async fn rules(State((catalog, _)): State<AppState>) -> Json<Rules> {
    info!("GET /rules");
    Json(catalog.rules.clone())
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::AutoActionMode;
    use crate::routes::test_state;

    #[test]
    fn test_rules_defaults() {
        // ---
        let Json(rules) = tokio_test::block_on(rules(State(test_state())));

        assert_eq!(rules.light_off_delay, 15);
        assert_eq!(rules.ac_off_delay, 20);
        assert_eq!(rules.auto_action_mode, AutoActionMode::Auto);
        assert_eq!(rules.computer_lab_settings.hidden_waste_threshold, 10);
    }

    #[test]
    fn test_privacy_statements() {
        // ---
        let Json(data) = tokio_test::block_on(privacy(State(test_state())));

        assert_eq!(data.camera_rooms.len(), 4);
        assert_eq!(data.compliance_statements.len(), 7);
        assert!(data
            .camera_rooms
            .iter()
            .all(|r| r.data_retention == "None"));
    }
}
