//! Maintenance-stop request service and validation.
//!
//! Every candidate request passes through [`validate_new_request`] (or, for
//! updates, a merge with the stored record followed by the same checks)
//! before it reaches the repository. Nothing malformed is persisted.

use chrono::NaiveDate;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{EquipmentStatus, HalfDayBound},
        stop_request::{
            CreateStopRequest, MaintenanceStopRequest, NewStopRequest, UpdateStopRequest,
        },
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct StopRequestsService {
    repository: Repository,
}

impl StopRequestsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> AppResult<Vec<MaintenanceStopRequest>> {
        self.repository.stop_requests.list(start_date, end_date).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<MaintenanceStopRequest> {
        self.repository.stop_requests.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateStopRequest) -> AppResult<MaintenanceStopRequest> {
        let candidate = validate_new_request(data)?;
        self.ensure_equipment_exist(&candidate.equipment_ids).await?;
        self.repository.stop_requests.create(&candidate).await
    }

    pub async fn update(
        &self,
        id: i32,
        data: &UpdateStopRequest,
    ) -> AppResult<MaintenanceStopRequest> {
        let existing = self.repository.stop_requests.get_by_id(id).await?;
        let merged = merge_update(&existing, data)?;
        self.ensure_equipment_exist(&merged.equipment_ids).await?;
        self.repository.stop_requests.update(id, &merged).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.stop_requests.delete(id).await
    }

    /// Reject requests pointing at equipment absent from the directory
    async fn ensure_equipment_exist(&self, ids: &[i32]) -> AppResult<()> {
        let known = self.repository.equipment.existing_ids(ids).await?;
        let missing: Vec<i32> = ids.iter().copied().filter(|id| !known.contains(id)).collect();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Unknown equipment ids: {:?}",
                missing
            )));
        }
        Ok(())
    }
}

/// Validate a candidate stop request and normalize it for persistence
pub fn validate_new_request(data: &CreateStopRequest) -> AppResult<NewStopRequest> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let date_start = parse_date(data.date_start.as_deref(), "date_start")?;
    let date_end = parse_date(data.date_end.as_deref(), "date_end")?;
    if date_end < date_start {
        return Err(AppError::Validation(
            "date_end must not be before date_start".to_string(),
        ));
    }

    let recipient_user_id = data.recipient_user_id.ok_or_else(|| {
        AppError::Validation("Missing recipient_user_id".to_string())
    })?;

    Ok(NewStopRequest {
        equipment_ids: data.equipment_ids.clone(),
        date_start,
        date_end,
        half_day_start: parse_half_day(data.half_day_start.as_deref(), "half_day_start")?,
        half_day_end: parse_half_day(data.half_day_end.as_deref(), "half_day_end")?,
        status: parse_stoppage_status(&data.status)?,
        linked_work_order_id: data.linked_work_order_id,
        linked_preventive_maintenance_id: data.linked_preventive_maintenance_id,
        recipient_user_id,
        comment: data.comment.clone(),
    })
}

/// Merge a patch into a stored request and re-validate the result
pub fn merge_update(
    existing: &MaintenanceStopRequest,
    patch: &UpdateStopRequest,
) -> AppResult<NewStopRequest> {
    let equipment_ids = patch
        .equipment_ids
        .clone()
        .unwrap_or_else(|| existing.equipment_ids.clone());
    if equipment_ids.is_empty() {
        return Err(AppError::Validation(
            "At least one equipment must be selected".to_string(),
        ));
    }

    let date_start = match patch.date_start.as_deref() {
        Some(raw) => parse_date(Some(raw), "date_start")?,
        None => existing.date_start,
    };
    let date_end = match patch.date_end.as_deref() {
        Some(raw) => parse_date(Some(raw), "date_end")?,
        None => existing.date_end,
    };
    if date_end < date_start {
        return Err(AppError::Validation(
            "date_end must not be before date_start".to_string(),
        ));
    }

    let half_day_start = match patch.half_day_start.as_deref() {
        Some(raw) => parse_half_day(Some(raw), "half_day_start")?,
        None => HalfDayBound::from(existing.half_day_start),
    };
    let half_day_end = match patch.half_day_end.as_deref() {
        Some(raw) => parse_half_day(Some(raw), "half_day_end")?,
        None => HalfDayBound::from(existing.half_day_end),
    };
    let status = match patch.status.as_deref() {
        Some(raw) => parse_stoppage_status(raw)?,
        None => EquipmentStatus::from(existing.status),
    };

    Ok(NewStopRequest {
        equipment_ids,
        date_start,
        date_end,
        half_day_start,
        half_day_end,
        status,
        linked_work_order_id: patch.linked_work_order_id.or(existing.linked_work_order_id),
        linked_preventive_maintenance_id: patch
            .linked_preventive_maintenance_id
            .or(existing.linked_preventive_maintenance_id),
        recipient_user_id: patch.recipient_user_id.unwrap_or(existing.recipient_user_id),
        comment: patch.comment.clone().or_else(|| existing.comment.clone()),
    })
}

fn parse_date(value: Option<&str>, field: &str) -> AppResult<NaiveDate> {
    let raw = value.ok_or_else(|| AppError::Validation(format!("Missing {}", field)))?;
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid {} (use YYYY-MM-DD)", field)))
}

fn parse_half_day(value: Option<&str>, field: &str) -> AppResult<HalfDayBound> {
    match value {
        None => Ok(HalfDayBound::FullDay),
        Some(raw) => HalfDayBound::parse_label(raw)
            .ok_or_else(|| AppError::Validation(format!("Unrecognized {} '{}'", field, raw))),
    }
}

fn parse_stoppage_status(raw: &str) -> AppResult<EquipmentStatus> {
    let status = EquipmentStatus::parse_label(raw)
        .ok_or_else(|| AppError::Validation(format!("Unrecognized status '{}'", raw)))?;
    if !status.is_stoppage() {
        return Err(AppError::Validation(
            "Stop request status must be under_maintenance or out_of_service".to_string(),
        ));
    }
    Ok(status)
}
