//! Equipment availability scheduler.
//!
//! Pure, synchronous resolution of equipment status per half-day slot, and
//! its aggregation over a full year. Nothing in this module performs I/O or
//! knows about refresh cadence; callers materialize the equipment and
//! request lists and invoke these functions on every recomputation.

pub mod aggregator;
pub mod index;
pub mod resolver;

use chrono::{Datelike, NaiveDate};

use crate::models::{
    enums::{EquipmentStatus, HalfDayBound},
    equipment::Equipment,
    stop_request::MaintenanceStopRequest,
};

pub use aggregator::{aggregate, AnnualAvailability};
pub use index::AvailabilityIndex;
pub use resolver::resolve;

/// Serial index of a half-day slot: two slots per calendar day, morning
/// first. Monotonic across the whole calendar, so interval comparisons
/// reduce to integer comparisons.
pub fn slot_index(date: NaiveDate, is_morning: bool) -> i64 {
    date.num_days_from_ce() as i64 * 2 + if is_morning { 0 } else { 1 }
}

/// First slot covered by a request: the morning of `date_start`, unless the
/// stoppage only starts in the afternoon of that day.
pub(crate) fn first_covered_slot(request: &MaintenanceStopRequest) -> i64 {
    let afternoon_start =
        HalfDayBound::from(request.half_day_start) == HalfDayBound::Afternoon;
    slot_index(request.date_start, !afternoon_start)
}

/// Last slot covered by a request: the afternoon of `date_end`, unless the
/// stoppage already ends with the morning of that day.
pub(crate) fn last_covered_slot(request: &MaintenanceStopRequest) -> i64 {
    let morning_end = HalfDayBound::from(request.half_day_end) == HalfDayBound::Morning;
    slot_index(request.date_end, morning_end)
}

/// Whether a request covers the given equipment and slot. Days strictly
/// between the boundaries are always fully covered; a same-day request with
/// an afternoon start and a morning end covers nothing.
pub(crate) fn covers_slot(
    request: &MaintenanceStopRequest,
    equipment_id: i32,
    slot: i64,
) -> bool {
    request.equipment_ids.contains(&equipment_id)
        && first_covered_slot(request) <= slot
        && slot <= last_covered_slot(request)
}

/// Baseline status of an equipment, operational when unset
pub fn baseline_status(equipment: &Equipment) -> EquipmentStatus {
    equipment
        .baseline_status
        .map(EquipmentStatus::from)
        .unwrap_or(EquipmentStatus::Operational)
}
