//! Availability endpoints (calendar feed and single-slot resolution)

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{AppError, AppResult},
    models::enums::{EquipmentStatus, HalfDayBound},
};

/// Resolved statuses of one equipment for one day
#[derive(Serialize, ToSchema)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub morning: EquipmentStatus,
    pub afternoon: EquipmentStatus,
}

/// Calendar row for one equipment
#[derive(Serialize, ToSchema)]
pub struct EquipmentCalendar {
    pub equipment_id: i32,
    pub equipment_name: String,
    pub days: Vec<DayAvailability>,
}

/// Calendar feed over a date range
#[derive(Serialize, ToSchema)]
pub struct CalendarResponse {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub equipment: Vec<EquipmentCalendar>,
}

/// Query parameters for the calendar feed
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct CalendarQuery {
    /// First day of the range (YYYY-MM-DD)
    pub start_date: String,
    /// Last day of the range (YYYY-MM-DD)
    pub end_date: String,
}

/// Query parameters for single-slot resolution
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct SlotQuery {
    pub equipment_id: i32,
    /// Day to resolve (YYYY-MM-DD)
    pub date: String,
    /// Half-day period (morning or afternoon)
    pub period: String,
}

/// Resolved status of one half-day slot
#[derive(Serialize, ToSchema)]
pub struct SlotResponse {
    pub equipment_id: i32,
    pub date: NaiveDate,
    pub period: String,
    pub status: EquipmentStatus,
}

fn parse_date(raw: &str, field: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid {} (use YYYY-MM-DD)", field)))
}

/// Resolved availability calendar (one cell per equipment, day and half-day)
#[utoipa::path(
    get,
    path = "/availability/calendar",
    tag = "availability",
    params(CalendarQuery),
    responses(
        (status = 200, description = "Resolved calendar", body = CalendarResponse),
        (status = 400, description = "Invalid date range")
    )
)]
pub async fn get_calendar(
    State(state): State<crate::AppState>,
    Query(query): Query<CalendarQuery>,
) -> AppResult<Json<CalendarResponse>> {
    let start = parse_date(&query.start_date, "start_date")?;
    let end = parse_date(&query.end_date, "end_date")?;
    let calendar = state.services.availability.calendar(start, end).await?;
    Ok(Json(calendar))
}

/// Resolve the status of a single half-day slot
#[utoipa::path(
    get,
    path = "/availability/slot",
    tag = "availability",
    params(SlotQuery),
    responses(
        (status = 200, description = "Resolved slot status", body = SlotResponse),
        (status = 404, description = "Unknown equipment")
    )
)]
pub async fn resolve_slot(
    State(state): State<crate::AppState>,
    Query(query): Query<SlotQuery>,
) -> AppResult<Json<SlotResponse>> {
    let date = parse_date(&query.date, "date")?;
    let period = HalfDayBound::parse_label(&query.period)
        .filter(|p| *p != HalfDayBound::FullDay)
        .ok_or_else(|| {
            AppError::Validation("period must be morning or afternoon".to_string())
        })?;
    let is_morning = period == HalfDayBound::Morning;

    let status = state
        .services
        .availability
        .resolve_slot(query.equipment_id, date, is_morning)
        .await?;

    Ok(Json(SlotResponse {
        equipment_id: query.equipment_id,
        date,
        period: period.to_string(),
        status,
    }))
}
