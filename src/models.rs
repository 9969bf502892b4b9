//! Catalog data models for the WattWatch backend.
//!
//! Records are deserialized from the catalog JSON as-is; every derived value
//! (efficiency, heatmap status, hidden waste) is attached by
//! [`Room::to_summary`] and [`Room::to_detail`] at request time.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::metrics::{self, Efficiency, EfficiencyStatus, HiddenWaste};

// ---

/// Kind of space a room is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    Classroom,
    #[serde(rename = "Computer Lab")]
    ComputerLab,
    Lab,
    Hostel,
    Office,
    Library,
}

/// How occupancy is detected for a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonitoringMethod {
    Camera,
    #[serde(rename = "Smart Plug")]
    SmartPlug,
    Sensor,
    Schedule,
}

/// One appliance (or bank of identical appliances) in a room.
///
/// `count`, `monitors_on` and `cpus_active` are only present on the
/// `desktops` entry of computer labs. Older catalog shapes call the powered
/// CPU count `totalOn`; it is read into `cpus_active`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appliance {
    // ---
    #[serde(alias = "status")]
    pub on: bool,
    pub wattage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitors_on: Option<u32>,
    #[serde(default, alias = "totalOn", skip_serializing_if = "Option::is_none")]
    pub cpus_active: Option<u32>,
}

/// A monitored room as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    // ---
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub monitoring_method: MonitoringMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitoring_type: Option<String>,
    pub occupancy: u32,
    pub appliances: BTreeMap<String, Appliance>,
    pub energy_usage_today: f64,
    pub potential_savings: f64,
}

/// Room as listed on the dashboard, heatmap and lab overview.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummary {
    // ---
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub monitoring_method: MonitoringMethod,
    pub occupancy: u32,
    pub energy_usage_today: f64,
    pub potential_savings: f64,
    pub status: EfficiencyStatus,
    pub status_label: &'static str,
    pub efficiency: Efficiency,
    /// Names of appliances currently switched on.
    pub active_appliances: Vec<String>,
}

/// One row of the room detail appliance table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplianceView {
    // ---
    pub name: String,
    #[serde(flatten)]
    pub appliance: Appliance,
}

/// Full room detail view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetail {
    // ---
    #[serde(flatten)]
    pub summary: RoomSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_type: Option<String>,
    pub appliances: Vec<ApplianceView>,
    pub hidden_waste: Option<HiddenWaste>,
}

/// Derived-value helpers
impl Room {
    // ---
    pub fn efficiency(&self) -> Efficiency {
        metrics::classify_efficiency(self.energy_usage_today, self.potential_savings)
    }

    pub fn heatmap_status(&self) -> EfficiencyStatus {
        metrics::classify_heatmap_status(
            self.occupancy,
            self.energy_usage_today,
            self.potential_savings,
        )
    }

    /// Hidden waste for computer labs; `None` for every other room type or a
    /// lab without a `desktops` entry. A desktop bank that is switched off
    /// has no active CPUs.
    pub fn hidden_waste(&self) -> Option<HiddenWaste> {
        // ---
        if self.room_type != RoomType::ComputerLab {
            return None;
        }
        let desktops = self.appliances.get("desktops")?;
        let cpus_active = if desktops.on {
            desktops
                .cpus_active
                .or(desktops.count)
                .unwrap_or_default()
        } else {
            0
        };
        Some(metrics::detect_hidden_waste(
            cpus_active,
            desktops.monitors_on.unwrap_or_default(),
        ))
    }

    pub fn to_summary(&self) -> RoomSummary {
        // ---
        let efficiency = self.efficiency();

        RoomSummary {
            id: self.id,
            name: self.name.clone(),
            room_type: self.room_type,
            monitoring_method: self.monitoring_method,
            occupancy: self.occupancy,
            energy_usage_today: self.energy_usage_today,
            potential_savings: self.potential_savings,
            status: efficiency.status,
            status_label: efficiency.status.label(),
            efficiency,
            active_appliances: self
                .appliances
                .iter()
                .filter(|(_, a)| a.on)
                .map(|(name, _)| name.clone())
                .collect(),
        }
    }

    pub fn to_detail(&self) -> RoomDetail {
        // ---
        RoomDetail {
            summary: self.to_summary(),
            monitoring_type: self.monitoring_type.clone(),
            appliances: self
                .appliances
                .iter()
                .map(|(name, appliance)| ApplianceView {
                    name: name.clone(),
                    appliance: appliance.clone(),
                })
                .collect(),
            hidden_waste: self.hidden_waste(),
        }
    }
}

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// Simulated waste alert. Generated once per demo session; never linked back
/// to live room state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    // ---
    pub id: u32,
    pub room_id: u32,
    pub room_name: String,
    pub room_type: RoomType,
    pub wasting_appliance: String,
    /// Human readable label such as "45 minutes".
    pub duration: String,
    pub severity: Severity,
    pub estimated_waste: f64,
    pub timestamp: NaiveDateTime,
    pub auto_action_taken: bool,
    pub action_details: String,
}

/// Static audit trail entry. Every entry is simulated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    // ---
    pub id: u32,
    pub timestamp: NaiveDateTime,
    pub room: String,
    pub action: String,
    pub reason: String,
    pub confidence: Option<u8>,
    pub simulated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

/// Audit log entry with presentation fields attached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogView {
    // ---
    #[serde(flatten)]
    pub entry: AuditLogEntry,
    pub confidence_band: Option<ConfidenceBand>,
    /// e.g. "28 Jan"
    pub display_date: String,
    /// e.g. "10:15 am"
    pub display_time: String,
}

impl AuditLogEntry {
    // ---
    pub fn confidence_band(&self) -> Option<ConfidenceBand> {
        self.confidence.map(|level| match level {
            95..=u8::MAX => ConfidenceBand::High,
            85..=94 => ConfidenceBand::Medium,
            _ => ConfidenceBand::Low,
        })
    }

    pub fn to_view(&self) -> AuditLogView {
        AuditLogView {
            entry: self.clone(),
            confidence_band: self.confidence_band(),
            display_date: self.timestamp.format("%-d %b").to_string(),
            display_time: self.timestamp.format("%I:%M %P").to_string(),
        }
    }
}

// ---

/// Smart-plug derived figures for one computer lab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputerLabProfile {
    // ---
    pub total_desktops: u32,
    pub desktops_on: u32,
    pub monitors_on: u32,
    pub cpus_active: u32,
    pub estimated_waste_watts: f64,
    /// Percent, 0-100.
    pub avg_cpu_usage: f64,
    pub idle_desktops: u32,
}

impl ComputerLabProfile {
    pub fn hidden_waste(&self) -> HiddenWaste {
        metrics::detect_hidden_waste(self.cpus_active, self.monitors_on)
    }
}

/// Labelled numeric series, handed as-is to the charting layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyAnalytics {
    pub energy_saved_over_time: Series,
    pub waste_by_room: Series,
    pub monthly_trend: Series,
}

/// Headline figures for the dashboard. Literal demo values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardKpis {
    // ---
    pub total_rooms: u32,
    pub active_waste_cases: u32,
    /// kWh
    pub energy_saved_today: f64,
    /// INR
    pub estimated_cost_saved: f64,
    /// kg
    pub co2_reduced: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraRoom {
    pub name: String,
    pub processing_type: String,
    pub data_retention: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NonCameraRoom {
    pub name: String,
    pub method: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacyData {
    pub camera_rooms: Vec<CameraRoom>,
    pub non_camera_rooms: Vec<NonCameraRoom>,
    pub compliance_statements: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoActionMode {
    Auto,
    Manual,
    Alert,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputerLabSettings {
    /// Minutes a CPU may run with its monitor off before it is flagged.
    pub hidden_waste_threshold: u32,
    pub cpu_activity_monitoring: bool,
    pub monitor_off_alert: bool,
}

/// Default automation rules. All delays are in minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rules {
    // ---
    pub empty_room_threshold: u32,
    pub light_off_delay: u32,
    pub ac_off_delay: u32,
    pub schedule_buffer: u32,
    pub auto_action_mode: AutoActionMode,
    pub computer_lab_settings: ComputerLabSettings,
}
