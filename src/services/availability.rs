//! Availability resolution service.
//!
//! Materializes the equipment directory and the intersecting slice of the
//! request store, then runs the pure scheduler over them. Each call works on
//! a fresh snapshot; refresh cadence is entirely the caller's concern.

use chrono::NaiveDate;

use crate::{
    api::availability::{CalendarResponse, DayAvailability, EquipmentCalendar},
    error::{AppError, AppResult},
    models::enums::EquipmentStatus,
    repository::Repository,
    scheduler::{self, AvailabilityIndex},
};

#[derive(Clone)]
pub struct AvailabilityService {
    repository: Repository,
}

impl AvailabilityService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Resolve every (equipment, day, half-day) cell of a date range
    pub async fn calendar(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<CalendarResponse> {
        if end_date < start_date {
            return Err(AppError::Validation(
                "end_date must not be before start_date".to_string(),
            ));
        }

        let equipment = self.repository.equipment.list().await?;
        let requests = self
            .repository
            .stop_requests
            .list_intersecting(start_date, end_date)
            .await?;
        let index = AvailabilityIndex::build(&equipment, &requests)?;

        let mut rows = Vec::with_capacity(equipment.len());
        for unit in &equipment {
            let mut days = Vec::new();
            let mut day = start_date;
            while day <= end_date {
                days.push(DayAvailability {
                    date: day,
                    morning: index.status_at(unit.id, day, true)?,
                    afternoon: index.status_at(unit.id, day, false)?,
                });
                day = match day.succ_opt() {
                    Some(next) => next,
                    None => break,
                };
            }
            rows.push(EquipmentCalendar {
                equipment_id: unit.id,
                equipment_name: unit.name.clone(),
                days,
            });
        }

        Ok(CalendarResponse {
            start_date,
            end_date,
            equipment: rows,
        })
    }

    /// Resolve a single half-day slot
    pub async fn resolve_slot(
        &self,
        equipment_id: i32,
        date: NaiveDate,
        is_morning: bool,
    ) -> AppResult<EquipmentStatus> {
        let equipment = self.repository.equipment.list().await?;
        let requests = self
            .repository
            .stop_requests
            .list_intersecting(date, date)
            .await?;
        scheduler::resolve(equipment_id, date, is_morning, &requests, &equipment)
    }
}
