//! Static demo catalog.
//!
//! The built-in catalog is embedded at compile time from
//! `data/catalog.json`. A file with the same shape can replace it via
//! `WATTWATCH_CATALOG`. Either way it is parsed once at startup and shared
//! read-only for the life of the process.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use uuid::Uuid;

use crate::models::{
    Alert, AuditLogEntry, ComputerLabProfile, DashboardKpis, EnergyAnalytics, PrivacyData, Room,
    RoomType, Rules,
};
use crate::Config;

// ---

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// On-disk catalog layout.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    // ---
    kpis: DashboardKpis,
    rooms: Vec<Room>,
    alerts: Vec<Alert>,
    computer_labs: BTreeMap<String, ComputerLabProfile>,
    analytics: EnergyAnalytics,
    privacy: PrivacyData,
    rules: Rules,
    audit_logs: Vec<AuditLogEntry>,
}

/// Immutable snapshot of every record the dashboard shows.
#[derive(Debug, Clone)]
pub struct Catalog {
    // ---
    /// Identifies this demo session; alerts are considered generated once
    /// per session.
    pub session_id: Uuid,
    pub kpis: DashboardKpis,
    pub rooms: Vec<Room>,
    pub alerts: Vec<Alert>,
    pub computer_labs: BTreeMap<String, ComputerLabProfile>,
    pub analytics: EnergyAnalytics,
    pub privacy: PrivacyData,
    pub rules: Rules,
    pub audit_logs: Vec<AuditLogEntry>,
}

impl Catalog {
    // ---
    /// Parse the catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG).context("built-in catalog is invalid")
    }

    /// Parse a catalog file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        // ---
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read catalog '{}': {}", path.display(), e))?;

        Self::from_json(&raw).with_context(|| format!("catalog '{}' is invalid", path.display()))
    }

    /// Load the override catalog when one is configured, the built-in one
    /// otherwise.
    pub fn load(config: &Config) -> Result<Self> {
        // ---
        let catalog = match &config.catalog_path {
            Some(path) => {
                tracing::info!("Loading catalog from {}", path);
                Self::from_path(path)?
            }
            None => {
                tracing::info!("Loading built-in catalog");
                Self::builtin()?
            }
        };

        tracing::info!(
            "Catalog ready: {} rooms, {} alerts, {} audit entries (session {})",
            catalog.rooms.len(),
            catalog.alerts.len(),
            catalog.audit_logs.len(),
            catalog.session_id
        );
        Ok(catalog)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        // ---
        let file: CatalogFile = serde_json::from_str(raw)?;

        let mut seen = HashSet::new();
        for room in &file.rooms {
            if !seen.insert(room.id) {
                bail!("duplicate room id {}", room.id);
            }
            if room.energy_usage_today < 0.0 {
                bail!(
                    "room {} has negative energyUsageToday {}",
                    room.id,
                    room.energy_usage_today
                );
            }
            if room.potential_savings < 0.0 {
                bail!(
                    "room {} has negative potentialSavings {}",
                    room.id,
                    room.potential_savings
                );
            }
        }

        for entry in &file.audit_logs {
            if let Some(confidence) = entry.confidence.filter(|c| *c > 100) {
                bail!(
                    "audit log {} has confidence {} outside 0-100",
                    entry.id,
                    confidence
                );
            }
        }

        for alert in &file.alerts {
            if !seen.contains(&alert.room_id) {
                tracing::warn!(
                    "Alert {} references unknown room id {}",
                    alert.id,
                    alert.room_id
                );
            }
        }

        Ok(Catalog {
            session_id: Uuid::new_v4(),
            kpis: file.kpis,
            rooms: file.rooms,
            alerts: file.alerts,
            computer_labs: file.computer_labs,
            analytics: file.analytics,
            privacy: file.privacy,
            rules: file.rules,
            audit_logs: file.audit_logs,
        })
    }

    pub fn room(&self, id: u32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn computer_labs(&self) -> impl Iterator<Item = &Room> {
        self.rooms
            .iter()
            .filter(|r| r.room_type == RoomType::ComputerLab)
    }

    pub fn lab_profile(&self, name: &str) -> Option<&ComputerLabProfile> {
        self.computer_labs.get(name)
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::metrics::EfficiencyStatus;

    #[test]
    fn test_builtin_catalog_parses() {
        // ---
        let catalog = Catalog::builtin().unwrap();

        assert_eq!(catalog.rooms.len(), 11);
        assert_eq!(catalog.alerts.len(), 4);
        assert_eq!(catalog.audit_logs.len(), 6);
        assert_eq!(catalog.computer_labs.len(), 2);
        assert_eq!(catalog.kpis.total_rooms, 11);
        assert_eq!(catalog.rules.empty_room_threshold, 30);
    }

    #[test]
    fn test_room_lookup() {
        // ---
        let catalog = Catalog::builtin().unwrap();

        assert_eq!(catalog.room(2).unwrap().name, "Computer Lab 101");
        assert!(catalog.room(999).is_none());
    }

    #[test]
    fn test_builtin_status_distribution() {
        // ---
        let catalog = Catalog::builtin().unwrap();
        let count = |s: EfficiencyStatus| {
            catalog
                .rooms
                .iter()
                .filter(|r| r.efficiency().status == s)
                .count()
        };

        assert_eq!(count(EfficiencyStatus::Efficient), 5);
        assert_eq!(count(EfficiencyStatus::Review), 3);
        assert_eq!(count(EfficiencyStatus::Waste), 3);
    }

    #[test]
    fn test_computer_labs_have_profiles_and_hidden_waste() {
        // ---
        let catalog = Catalog::builtin().unwrap();
        let labs: Vec<_> = catalog.computer_labs().collect();

        assert_eq!(labs.len(), 2);
        for lab in labs {
            assert!(catalog.lab_profile(&lab.name).is_some());
            assert!(lab.hidden_waste().unwrap().has_hidden_waste);
        }
    }

    #[test]
    fn test_duplicate_room_ids_rejected() {
        // ---
        let mut value: serde_json::Value = serde_json::from_str(BUILTIN_CATALOG).unwrap();
        let first = value["rooms"][0].clone();
        value["rooms"].as_array_mut().unwrap().push(first);

        let err = Catalog::from_json(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("duplicate room id 1"));
    }

    fn tweak_builtin(edit: impl FnOnce(&mut serde_json::Value)) -> String {
        let mut value: serde_json::Value = serde_json::from_str(BUILTIN_CATALOG).unwrap();
        edit(&mut value);
        value.to_string()
    }

    #[test]
    fn test_negative_energy_rejected() {
        // ---
        let raw = tweak_builtin(|v| v["rooms"][0]["energyUsageToday"] = (-2.0).into());

        let err = Catalog::from_json(&raw).unwrap_err();
        assert!(err.to_string().contains("negative energyUsageToday"));
    }

    #[test]
    fn test_negative_savings_rejected() {
        // ---
        let raw = tweak_builtin(|v| v["rooms"][3]["potentialSavings"] = (-0.1).into());

        let err = Catalog::from_json(&raw).unwrap_err();
        assert!(err.to_string().contains("room 4 has negative potentialSavings"));
    }

    #[test]
    fn test_confidence_above_100_rejected() {
        // ---
        let raw = tweak_builtin(|v| v["auditLogs"][0]["confidence"] = 180.into());

        let err = Catalog::from_json(&raw).unwrap_err();
        assert!(err.to_string().contains("audit log 1 has confidence 180"));
    }

    #[test]
    fn test_zero_usage_and_null_confidence_accepted() {
        // ---
        let raw = tweak_builtin(|v| {
            v["rooms"][0]["energyUsageToday"] = 0.0.into();
            v["rooms"][0]["potentialSavings"] = 0.0.into();
        });

        let catalog = Catalog::from_json(&raw).unwrap();
        assert_eq!(catalog.room(1).unwrap().efficiency().ratio, 1.0);
        assert_eq!(catalog.audit_logs[4].confidence, None);
    }

    #[test]
    fn test_missing_catalog_file() {
        // ---
        let err = Catalog::from_path("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog"));
    }

    #[test]
    fn test_each_load_gets_a_new_session() {
        // ---
        let a = Catalog::builtin().unwrap();
        let b = Catalog::builtin().unwrap();
        assert_ne!(a.session_id, b.session_id);
    }
}
