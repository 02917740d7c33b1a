//! Equipment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: i32,
    /// Equipment name / description
    pub name: String,
    /// Baseline status (0=operational, 1=under_maintenance, 2=out_of_service);
    /// NULL means operational
    pub baseline_status: Option<i16>,
    /// Physical location (building, room, line)
    pub location: Option<String>,
    pub notes: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Create equipment request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEquipment {
    pub name: String,
    /// Baseline status label (operational, under_maintenance, out_of_service)
    pub baseline_status: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

/// Update equipment request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEquipment {
    pub name: Option<String>,
    pub baseline_status: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
}
