//! Shared domain enums (status vocabulary and half-day taxonomy)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// EquipmentStatus
// ---------------------------------------------------------------------------

/// Equipment operational status.
///
/// Variants are declared in severity order; `Ord` is relied on wherever
/// overlapping stop requests compete for the same slot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum EquipmentStatus {
    Operational = 0,
    UnderMaintenance = 1,
    OutOfService = 2,
}

impl EquipmentStatus {
    /// Parse a status label from client or imported data.
    ///
    /// Labels are matched case-insensitively with spaces and hyphens folded
    /// to underscores. The source data carries a handful of legacy spellings;
    /// anything else is rejected rather than passed through.
    pub fn parse_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "operational" | "operationnal" => Some(EquipmentStatus::Operational),
            "under_maintenance" | "maintenance" => Some(EquipmentStatus::UnderMaintenance),
            "out_of_service" | "out_of_order" => Some(EquipmentStatus::OutOfService),
            _ => None,
        }
    }

    /// True for the statuses a stop request may apply to covered slots
    pub fn is_stoppage(self) -> bool {
        matches!(
            self,
            EquipmentStatus::UnderMaintenance | EquipmentStatus::OutOfService
        )
    }
}

impl From<i16> for EquipmentStatus {
    fn from(v: i16) -> Self {
        match v {
            1 => EquipmentStatus::UnderMaintenance,
            2 => EquipmentStatus::OutOfService,
            _ => EquipmentStatus::Operational,
        }
    }
}

impl From<EquipmentStatus> for i16 {
    fn from(s: EquipmentStatus) -> Self {
        s as i16
    }
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EquipmentStatus::Operational => "operational",
            EquipmentStatus::UnderMaintenance => "under_maintenance",
            EquipmentStatus::OutOfService => "out_of_service",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// HalfDayBound
// ---------------------------------------------------------------------------

/// Which half of a boundary day a stop request actually covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum HalfDayBound {
    FullDay = 0,
    Morning = 1,
    Afternoon = 2,
}

impl HalfDayBound {
    /// Parse a half-day label; same normalization rules as status labels
    pub fn parse_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "full_day" | "full" => Some(HalfDayBound::FullDay),
            "morning" | "am" => Some(HalfDayBound::Morning),
            "afternoon" | "pm" => Some(HalfDayBound::Afternoon),
            _ => None,
        }
    }
}

impl From<i16> for HalfDayBound {
    fn from(v: i16) -> Self {
        match v {
            1 => HalfDayBound::Morning,
            2 => HalfDayBound::Afternoon,
            _ => HalfDayBound::FullDay,
        }
    }
}

impl From<HalfDayBound> for i16 {
    fn from(b: HalfDayBound) -> Self {
        b as i16
    }
}

impl std::fmt::Display for HalfDayBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            HalfDayBound::FullDay => "full_day",
            HalfDayBound::Morning => "morning",
            HalfDayBound::Afternoon => "afternoon",
        };
        write!(f, "{}", label)
    }
}

fn normalize_label(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .replace([' ', '-'], "_")
}
