//! Derived room metrics: efficiency ratio, status classification and
//! computer-lab hidden waste.
//!
//! Two classifications exist and are kept apart on purpose:
//! [`classify_efficiency`] is ratio based and drives status badges and the
//! room detail view, while [`classify_heatmap_status`] flags empty rooms that
//! are still drawing power. They do not agree on every room.
//!
//! All functions are pure.

use serde::{Deserialize, Serialize};

// ---

/// Ratio strictly above this is `Efficient`.
pub const EFFICIENT_ABOVE: f64 = 0.7;

/// Ratio strictly above this (and not efficient) is `Review`.
pub const REVIEW_ABOVE: f64 = 0.4;

/// Heatmap: an empty room using more than this many kWh today is waste.
pub const HEATMAP_EMPTY_USAGE_KWH: f64 = 1.5;

/// Heatmap: recoverable kWh above this needs review.
pub const HEATMAP_REVIEW_SAVINGS_KWH: f64 = 2.0;

/// Three-way room status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EfficiencyStatus {
    Efficient,
    Review,
    Waste,
}

impl EfficiencyStatus {
    // ---
    pub const ALL: [EfficiencyStatus; 3] = [Self::Efficient, Self::Review, Self::Waste];

    /// Badge text on the room detail and status overview.
    pub fn label(self) -> &'static str {
        match self {
            Self::Efficient => "Efficient",
            Self::Review => "Needs Review",
            Self::Waste => "High Waste",
        }
    }

    /// Legend text on the heatmap.
    pub fn heatmap_label(self) -> &'static str {
        match self {
            Self::Efficient => "Efficient",
            Self::Review => "Review Needed",
            Self::Waste => "High Waste",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Efficient => "#10b981",
            Self::Review => "#f59e0b",
            Self::Waste => "#ef4444",
        }
    }
}

/// Ratio-based efficiency of a room.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Efficiency {
    // ---
    /// `1 - savings / usage`; may be negative, never above 1 for a
    /// validated catalog.
    pub ratio: f64,
    /// `ratio * 100`, rounded.
    pub percent: i64,
    pub status: EfficiencyStatus,
}

/// Classify a room by the share of today's usage that could be recovered.
///
/// A zero usage figure is replaced by 1 before dividing, so an idle room with
/// no savings scores 1.0. The ratio is not clamped: savings larger than usage
/// give a negative ratio, which lands in `Waste`.
pub fn classify_efficiency(energy_usage_today: f64, potential_savings: f64) -> Efficiency {
    // ---
    let divisor = if energy_usage_today == 0.0 {
        1.0
    } else {
        energy_usage_today
    };
    let ratio = 1.0 - (potential_savings / divisor);

    let status = if ratio > EFFICIENT_ABOVE {
        EfficiencyStatus::Efficient
    } else if ratio > REVIEW_ABOVE {
        EfficiencyStatus::Review
    } else {
        EfficiencyStatus::Waste
    };

    Efficiency {
        ratio,
        percent: (ratio * 100.0).round() as i64,
        status,
    }
}

/// Heatmap classification: empty-but-consuming first, then large savings.
pub fn classify_heatmap_status(
    occupancy: u32,
    energy_usage_today: f64,
    potential_savings: f64,
) -> EfficiencyStatus {
    // ---
    if occupancy == 0 && energy_usage_today > HEATMAP_EMPTY_USAGE_KWH {
        EfficiencyStatus::Waste
    } else if potential_savings > HEATMAP_REVIEW_SAVINGS_KWH {
        EfficiencyStatus::Review
    } else {
        EfficiencyStatus::Efficient
    }
}

/// Desktops drawing power with their display off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenWaste {
    // ---
    pub cpus_active: u32,
    pub monitors_on: u32,
    /// Signed; negative when more monitors than CPUs are reported on.
    pub hidden_waste_units: i64,
    pub has_hidden_waste: bool,
}

pub fn detect_hidden_waste(cpus_active: u32, monitors_on: u32) -> HiddenWaste {
    // ---
    let hidden_waste_units = i64::from(cpus_active) - i64::from(monitors_on);

    HiddenWaste {
        cpus_active,
        monitors_on,
        hidden_waste_units,
        has_hidden_waste: hidden_waste_units > 0,
    }
}
