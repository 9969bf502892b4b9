//! WattWatch campus energy audit backend.
//!
//! Serves the static demo catalog as JSON with derived room metrics
//! attached. Module layout follows the Explicit Module Boundary Pattern
//! (EMBP): `routes` only sees what this gateway re-exports, never sibling
//! internals such as config parsing.

pub mod catalog;
pub mod config;
pub mod metrics;
pub mod models;
pub mod routes;

pub use catalog::Catalog;
pub use config::Config;
pub use metrics::{Efficiency, EfficiencyStatus, HiddenWaste};
pub use models::{
    Alert, AuditLogEntry, AuditLogView, AutoActionMode, ComputerLabProfile, ConfidenceBand,
    DashboardKpis, EnergyAnalytics, MonitoringMethod, PrivacyData, Room, RoomDetail, RoomSummary,
    RoomType, Rules, Severity,
};
