//! Equipment service

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::EquipmentStatus,
        equipment::{CreateEquipment, Equipment, UpdateEquipment},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        self.repository.equipment.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        self.repository.equipment.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        if data.name.trim().is_empty() {
            return Err(AppError::Validation("Equipment name must not be empty".to_string()));
        }
        let baseline = normalize_baseline(data.baseline_status.as_deref())?;
        self.repository.equipment.create(data, baseline).await
    }

    pub async fn update(&self, id: i32, data: &UpdateEquipment) -> AppResult<Equipment> {
        if let Some(name) = &data.name {
            if name.trim().is_empty() {
                return Err(AppError::Validation("Equipment name must not be empty".to_string()));
            }
        }
        let baseline = normalize_baseline(data.baseline_status.as_deref())?;
        self.repository
            .equipment
            .update(
                id,
                data.name.as_deref(),
                baseline,
                data.location.as_deref(),
                data.notes.as_deref(),
            )
            .await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.equipment.delete(id).await
    }
}

/// Normalize a baseline status label to its storage code; unrecognized
/// labels are rejected rather than passed through
fn normalize_baseline(label: Option<&str>) -> AppResult<Option<i16>> {
    match label {
        None => Ok(None),
        Some(raw) => {
            let status = EquipmentStatus::parse_label(raw).ok_or_else(|| {
                AppError::Validation(format!("Unrecognized status '{}'", raw))
            })?;
            Ok(Some(status.into()))
        }
    }
}
