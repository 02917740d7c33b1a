//! Statistics endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{error::AppResult, scheduler::AnnualAvailability};

/// Query parameters for the annual availability report
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct AvailabilityStatsQuery {
    /// Year to aggregate (defaults to the current year)
    pub year: Option<i32>,
}

/// Per-equipment availability totals for one year
#[derive(Serialize, ToSchema)]
pub struct EquipmentAvailabilityStats {
    pub equipment_id: i32,
    pub equipment_name: String,
    pub operational_half_days: i64,
    pub maintenance_half_days: i64,
    pub out_of_service_half_days: i64,
    /// Share of operational half-days, for display only
    pub availability_rate: f64,
}

/// Annual availability report
#[derive(Serialize, ToSchema)]
pub struct AvailabilityStatsResponse {
    pub year: i32,
    pub days_in_year: i64,
    pub totals: AnnualAvailability,
    /// Share of operational half-days across the fleet, for display only
    pub availability_rate: f64,
    pub equipment: Vec<EquipmentAvailabilityStats>,
}

/// Annual availability report (half-day counts per status category)
#[utoipa::path(
    get,
    path = "/stats/availability",
    tag = "stats",
    params(AvailabilityStatsQuery),
    responses(
        (status = 200, description = "Annual availability report", body = AvailabilityStatsResponse)
    )
)]
pub async fn get_availability_stats(
    State(state): State<crate::AppState>,
    Query(query): Query<AvailabilityStatsQuery>,
) -> AppResult<Json<AvailabilityStatsResponse>> {
    let year = query.year.unwrap_or_else(|| Utc::now().year());
    let report = state.services.stats.availability_report(year).await?;
    Ok(Json(report))
}
