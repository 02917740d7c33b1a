//! Maintenance-stop request models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::enums::{EquipmentStatus, HalfDayBound};

/// A maintenance-stop request: one or more equipment units declared
/// unavailable over a date range, with half-day precision at the two
/// boundary days.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MaintenanceStopRequest {
    pub id: i32,
    /// Equipment covered by this stoppage
    pub equipment_ids: Vec<i32>,
    /// First day of the stoppage
    pub date_start: NaiveDate,
    /// Last day of the stoppage (inclusive)
    pub date_end: NaiveDate,
    /// Covered half of the first day (0=full_day, 1=morning, 2=afternoon)
    pub half_day_start: i16,
    /// Covered half of the last day (0=full_day, 1=morning, 2=afternoon)
    pub half_day_end: i16,
    /// Status applied to covered slots (1=under_maintenance, 2=out_of_service)
    pub status: i16,
    pub linked_work_order_id: Option<i32>,
    pub linked_preventive_maintenance_id: Option<i32>,
    /// User notified of the stoppage
    pub recipient_user_id: i32,
    pub comment: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Create stop-request payload
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStopRequest {
    #[validate(length(min = 1, message = "At least one equipment must be selected"))]
    pub equipment_ids: Vec<i32>,
    /// First day (YYYY-MM-DD)
    pub date_start: Option<String>,
    /// Last day (YYYY-MM-DD)
    pub date_end: Option<String>,
    /// Covered half of the first day (full_day, morning, afternoon);
    /// defaults to full_day
    pub half_day_start: Option<String>,
    /// Covered half of the last day; defaults to full_day
    pub half_day_end: Option<String>,
    /// Status label (under_maintenance, out_of_service)
    pub status: String,
    pub linked_work_order_id: Option<i32>,
    pub linked_preventive_maintenance_id: Option<i32>,
    pub recipient_user_id: Option<i32>,
    pub comment: Option<String>,
}

/// Update stop-request payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStopRequest {
    pub equipment_ids: Option<Vec<i32>>,
    pub date_start: Option<String>,
    pub date_end: Option<String>,
    pub half_day_start: Option<String>,
    pub half_day_end: Option<String>,
    pub status: Option<String>,
    pub linked_work_order_id: Option<i32>,
    pub linked_preventive_maintenance_id: Option<i32>,
    pub recipient_user_id: Option<i32>,
    pub comment: Option<String>,
}

/// A stop request that passed validation, with dates parsed and labels
/// normalized, ready for persistence
#[derive(Debug, Clone)]
pub struct NewStopRequest {
    pub equipment_ids: Vec<i32>,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    pub half_day_start: HalfDayBound,
    pub half_day_end: HalfDayBound,
    pub status: EquipmentStatus,
    pub linked_work_order_id: Option<i32>,
    pub linked_preventive_maintenance_id: Option<i32>,
    pub recipient_user_id: i32,
    pub comment: Option<String>,
}

/// Query parameters for listing stop requests
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct StopRequestQuery {
    /// Keep requests whose window intersects from this date (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// Keep requests whose window intersects until this date (YYYY-MM-DD)
    pub end_date: Option<String>,
}
