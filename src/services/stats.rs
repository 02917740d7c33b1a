//! Statistics service

use chrono::NaiveDate;

use crate::{
    api::stats::{AvailabilityStatsResponse, EquipmentAvailabilityStats},
    error::{AppError, AppResult},
    repository::Repository,
    scheduler::{aggregate, aggregator::days_in_year, AnnualAvailability},
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Annual availability report: fleet-wide totals plus one row per
    /// equipment, all in whole half-day units
    pub async fn availability_report(&self, year: i32) -> AppResult<AvailabilityStatsResponse> {
        let year_start = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| AppError::Validation(format!("Invalid year {}", year)))?;
        let year_end = NaiveDate::from_ymd_opt(year, 12, 31)
            .ok_or_else(|| AppError::Validation(format!("Invalid year {}", year)))?;

        let equipment = self.repository.equipment.list().await?;
        let requests = self
            .repository
            .stop_requests
            .list_intersecting(year_start, year_end)
            .await?;

        let totals = aggregate(year, &equipment, &requests)?;

        let mut rows = Vec::with_capacity(equipment.len());
        for unit in &equipment {
            let single = aggregate(year, std::slice::from_ref(unit), &requests)?;
            rows.push(EquipmentAvailabilityStats {
                equipment_id: unit.id,
                equipment_name: unit.name.clone(),
                operational_half_days: single.operational_half_days,
                maintenance_half_days: single.maintenance_half_days,
                out_of_service_half_days: single.out_of_service_half_days,
                availability_rate: availability_rate(&single),
            });
        }

        Ok(AvailabilityStatsResponse {
            year,
            days_in_year: days_in_year(year)?,
            availability_rate: availability_rate(&totals),
            totals,
            equipment: rows,
        })
    }
}

/// Share of operational half-days; zero for an empty fleet
fn availability_rate(totals: &AnnualAvailability) -> f64 {
    if totals.total_half_days == 0 {
        0.0
    } else {
        totals.operational_half_days as f64 / totals.total_half_days as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_rate() {
        let totals = AnnualAvailability {
            operational_half_days: 3,
            maintenance_half_days: 1,
            out_of_service_half_days: 0,
            total_half_days: 4,
        };
        assert!((availability_rate(&totals) - 0.75).abs() < f64::EPSILON);

        let empty = AnnualAvailability {
            operational_half_days: 0,
            maintenance_half_days: 0,
            out_of_service_half_days: 0,
            total_half_days: 0,
        };
        assert_eq!(availability_rate(&empty), 0.0);
    }
}
