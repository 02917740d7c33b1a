//! Maintenance-stop request API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;

use crate::{
    error::AppResult,
    models::stop_request::{
        CreateStopRequest, MaintenanceStopRequest, StopRequestQuery, UpdateStopRequest,
    },
};

/// List stop requests, optionally filtered to a date range
#[utoipa::path(
    get,
    path = "/stop-requests",
    tag = "stop-requests",
    params(StopRequestQuery),
    responses(
        (status = 200, description = "Stop request list", body = Vec<MaintenanceStopRequest>)
    )
)]
pub async fn list_stop_requests(
    State(state): State<crate::AppState>,
    Query(query): Query<StopRequestQuery>,
) -> AppResult<Json<Vec<MaintenanceStopRequest>>> {
    let start = query.start_date.as_ref()
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());
    let end = query.end_date.as_ref()
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());
    let requests = state.services.stop_requests.list(start, end).await?;
    Ok(Json(requests))
}

/// Get a stop request by ID
#[utoipa::path(
    get,
    path = "/stop-requests/{id}",
    tag = "stop-requests",
    params(("id" = i32, Path, description = "Stop request ID")),
    responses(
        (status = 200, description = "Stop request details", body = MaintenanceStopRequest)
    )
)]
pub async fn get_stop_request(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MaintenanceStopRequest>> {
    let request = state.services.stop_requests.get_by_id(id).await?;
    Ok(Json(request))
}

/// Create a stop request
#[utoipa::path(
    post,
    path = "/stop-requests",
    tag = "stop-requests",
    request_body = CreateStopRequest,
    responses(
        (status = 201, description = "Stop request created", body = MaintenanceStopRequest),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_stop_request(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateStopRequest>,
) -> AppResult<(StatusCode, Json<MaintenanceStopRequest>)> {
    let request = state.services.stop_requests.create(&data).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// Update a stop request
#[utoipa::path(
    put,
    path = "/stop-requests/{id}",
    tag = "stop-requests",
    params(("id" = i32, Path, description = "Stop request ID")),
    request_body = UpdateStopRequest,
    responses(
        (status = 200, description = "Stop request updated", body = MaintenanceStopRequest),
        (status = 400, description = "Validation error")
    )
)]
pub async fn update_stop_request(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateStopRequest>,
) -> AppResult<Json<MaintenanceStopRequest>> {
    let request = state.services.stop_requests.update(id, &data).await?;
    Ok(Json(request))
}

/// Delete a stop request
#[utoipa::path(
    delete,
    path = "/stop-requests/{id}",
    tag = "stop-requests",
    params(("id" = i32, Path, description = "Stop request ID")),
    responses(
        (status = 204, description = "Stop request deleted")
    )
)]
pub async fn delete_stop_request(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.stop_requests.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
