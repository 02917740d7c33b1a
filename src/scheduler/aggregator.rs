//! Annual availability aggregation

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{enums::EquipmentStatus, equipment::Equipment, stop_request::MaintenanceStopRequest},
};

use super::{baseline_status, index::AvailabilityIndex, slot_index};

/// Year-level availability totals, in whole half-day units.
///
/// `total_half_days` is `2 * days_in_year * equipment_count` and always
/// equals the sum of the three category buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct AnnualAvailability {
    pub operational_half_days: i64,
    pub maintenance_half_days: i64,
    pub out_of_service_half_days: i64,
    pub total_half_days: i64,
}

/// Number of calendar days in a year
pub fn days_in_year(year: i32) -> AppResult<i64> {
    let start = year_start(year)?;
    let next = year_start(year + 1)?;
    Ok((next - start).num_days())
}

fn year_start(year: i32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| AppError::Computation(format!("Year {} out of calendar range", year)))
}

/// Aggregate resolved statuses over every equipment, every day of `year`,
/// morning and afternoon. Requests are indexed once; each slot lookup is a
/// binary search over the equipment's coverage segments.
pub fn aggregate(
    year: i32,
    equipment: &[Equipment],
    requests: &[MaintenanceStopRequest],
) -> AppResult<AnnualAvailability> {
    let start = year_start(year)?;
    // Checked up front so the per-day loop cannot run off the calendar
    days_in_year(year)?;

    let index = AvailabilityIndex::build(equipment, requests)?;

    let mut operational = 0i64;
    let mut maintenance = 0i64;
    let mut out_of_service = 0i64;

    for unit in equipment {
        let timeline = index.timeline(unit.id);
        let baseline = baseline_status(unit);

        let mut day = start;
        while day.year() == year {
            for is_morning in [true, false] {
                let slot = slot_index(day, is_morning);
                let status = timeline
                    .and_then(|t| t.status_at(slot))
                    .unwrap_or(baseline);
                match status {
                    EquipmentStatus::Operational => operational += 1,
                    EquipmentStatus::UnderMaintenance => maintenance += 1,
                    EquipmentStatus::OutOfService => out_of_service += 1,
                }
            }
            day = match day.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
    }

    Ok(AnnualAvailability {
        operational_half_days: operational,
        maintenance_half_days: maintenance,
        out_of_service_half_days: out_of_service,
        total_half_days: operational + maintenance + out_of_service,
    })
}

#[cfg(test)]
mod tests {
    use super::super::testutil::*;
    use super::*;
    use crate::models::enums::HalfDayBound;

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(2024).unwrap(), 366);
        assert_eq!(days_in_year(2023).unwrap(), 365);
    }

    #[test]
    fn test_empty_fleet() {
        let result = aggregate(2024, &[], &[]).unwrap();
        assert_eq!(result.total_half_days, 0);
        assert_eq!(result.operational_half_days, 0);
    }

    #[test]
    fn test_no_requests_all_baseline() {
        let fleet = vec![equipment(1, None), equipment(2, Some(2))];
        let result = aggregate(2024, &fleet, &[]).unwrap();

        assert_eq!(result.total_half_days, 2 * 366 * 2);
        assert_eq!(result.operational_half_days, 2 * 366);
        assert_eq!(result.maintenance_half_days, 0);
        assert_eq!(result.out_of_service_half_days, 2 * 366);
    }

    #[test]
    fn test_aggregation_identity() {
        let fleet = vec![equipment(1, None), equipment(2, Some(1)), equipment(3, None)];
        let requests = vec![
            stop_request(
                1,
                vec![1, 3],
                date(2023, 2, 10),
                date(2023, 2, 20),
                HalfDayBound::Afternoon,
                HalfDayBound::Morning,
                EquipmentStatus::UnderMaintenance,
            ),
            stop_request(
                2,
                vec![1],
                date(2023, 2, 15),
                date(2023, 3, 1),
                HalfDayBound::FullDay,
                HalfDayBound::FullDay,
                EquipmentStatus::OutOfService,
            ),
        ];
        let result = aggregate(2023, &fleet, &requests).unwrap();

        assert_eq!(result.total_half_days, 2 * 365 * 3);
        assert_eq!(
            result.operational_half_days
                + result.maintenance_half_days
                + result.out_of_service_half_days,
            result.total_half_days
        );
    }

    #[test]
    fn test_counts_for_single_request() {
        // Three fully covered days -> six maintenance half-days
        let fleet = vec![equipment(1, None)];
        let requests = vec![stop_request(
            1,
            vec![1],
            date(2024, 3, 10),
            date(2024, 3, 12),
            HalfDayBound::Morning,
            HalfDayBound::FullDay,
            EquipmentStatus::UnderMaintenance,
        )];
        let result = aggregate(2024, &fleet, &requests).unwrap();

        assert_eq!(result.maintenance_half_days, 6);
        assert_eq!(result.out_of_service_half_days, 0);
        assert_eq!(result.operational_half_days, 2 * 366 - 6);
    }

    #[test]
    fn test_boundary_halves_counted_once() {
        // Afternoon start and morning end shave one half-day off each end
        let fleet = vec![equipment(1, None)];
        let requests = vec![stop_request(
            1,
            vec![1],
            date(2024, 3, 10),
            date(2024, 3, 12),
            HalfDayBound::Afternoon,
            HalfDayBound::Morning,
            EquipmentStatus::OutOfService,
        )];
        let result = aggregate(2024, &fleet, &requests).unwrap();

        assert_eq!(result.out_of_service_half_days, 4);
        assert_eq!(result.operational_half_days, 2 * 366 - 4);
    }

    #[test]
    fn test_request_outside_year_ignored() {
        let fleet = vec![equipment(1, None)];
        let requests = vec![stop_request(
            1,
            vec![1],
            date(2025, 1, 10),
            date(2025, 1, 12),
            HalfDayBound::FullDay,
            HalfDayBound::FullDay,
            EquipmentStatus::OutOfService,
        )];
        let result = aggregate(2024, &fleet, &requests).unwrap();
        assert_eq!(result.out_of_service_half_days, 0);
        assert_eq!(result.operational_half_days, result.total_half_days);
    }

    #[test]
    fn test_year_out_of_range() {
        let err = aggregate(400_000, &[], &[]).unwrap_err();
        assert!(matches!(err, AppError::Computation(_)));
    }
}
