//! Interval resolver: effective status of one equipment/half-day slot

use chrono::NaiveDate;

use crate::{
    error::{AppError, AppResult},
    models::{enums::EquipmentStatus, equipment::Equipment, stop_request::MaintenanceStopRequest},
};

use super::{baseline_status, covers_slot, slot_index};

/// Resolve the effective status of one equipment for one half-day slot.
///
/// A request covers the slot when the equipment belongs to it and the slot
/// falls inside its window, honoring the half-day boundary rule: an
/// afternoon start leaves the first morning uncovered, a morning end leaves
/// the last afternoon uncovered, and interior days are always fully covered.
///
/// When several requests cover the same slot, the most severe status wins
/// (out_of_service over under_maintenance); among equal severity the most
/// recently created request (highest id) wins. With no covering request the
/// equipment's baseline status applies.
pub fn resolve(
    equipment_id: i32,
    date: NaiveDate,
    is_morning: bool,
    requests: &[MaintenanceStopRequest],
    equipment: &[Equipment],
) -> AppResult<EquipmentStatus> {
    let unit = equipment
        .iter()
        .find(|e| e.id == equipment_id)
        .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", equipment_id)))?;

    let slot = slot_index(date, is_morning);
    let winner = requests
        .iter()
        .filter(|r| covers_slot(r, equipment_id, slot))
        .max_by_key(|r| (EquipmentStatus::from(r.status), r.id));

    Ok(match winner {
        Some(request) => EquipmentStatus::from(request.status),
        None => baseline_status(unit),
    })
}
