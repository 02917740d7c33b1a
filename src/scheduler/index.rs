//! Pre-indexed availability lookup.
//!
//! Scanning the full request list for every queried slot is fine for a
//! single cell but quadratic-ish across a whole calendar or year. The index
//! flattens each equipment's covering requests into sorted, non-overlapping
//! segments with the precedence already resolved, so a slot lookup is one
//! binary search. Built once per recomputation from an immutable snapshot.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;

use crate::{
    error::{AppError, AppResult},
    models::{enums::EquipmentStatus, equipment::Equipment, stop_request::MaintenanceStopRequest},
};

use super::{baseline_status, first_covered_slot, last_covered_slot, slot_index};

/// A maximal run of slots sharing one resolved status (bounds inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment {
    start: i64,
    end: i64,
    status: EquipmentStatus,
}

/// Sorted, non-overlapping coverage segments for one equipment
#[derive(Debug, Default)]
pub struct EquipmentTimeline {
    segments: Vec<Segment>,
}

impl EquipmentTimeline {
    /// Build from (first_slot, last_slot, status, request_id) coverage spans.
    /// Where spans overlap, the most severe status wins, then the highest id.
    fn build(mut spans: Vec<(i64, i64, EquipmentStatus, i32)>) -> Self {
        spans.retain(|(first, last, _, _)| first <= last);
        if spans.is_empty() {
            return Self::default();
        }

        // Elementary windows between consecutive request boundaries; no
        // boundary falls strictly inside a window, so one covering span
        // covers it whole.
        let mut breakpoints = BTreeSet::new();
        for (first, last, _, _) in &spans {
            breakpoints.insert(*first);
            breakpoints.insert(*last + 1);
        }

        let mut segments: Vec<Segment> = Vec::new();
        let points: Vec<i64> = breakpoints.into_iter().collect();
        for window in points.windows(2) {
            let (start, end) = (window[0], window[1] - 1);
            let winner = spans
                .iter()
                .filter(|(first, last, _, _)| *first <= start && start <= *last)
                .max_by_key(|(_, _, status, id)| (*status, *id));
            if let Some((_, _, status, _)) = winner {
                match segments.last_mut() {
                    Some(prev) if prev.end + 1 == start && prev.status == *status => {
                        prev.end = end;
                    }
                    _ => segments.push(Segment {
                        start,
                        end,
                        status: *status,
                    }),
                }
            }
        }

        Self { segments }
    }

    /// Resolved status at a slot, or None when no request covers it
    pub fn status_at(&self, slot: i64) -> Option<EquipmentStatus> {
        let idx = self.segments.partition_point(|s| s.start <= slot);
        if idx == 0 {
            return None;
        }
        let segment = &self.segments[idx - 1];
        (slot <= segment.end).then_some(segment.status)
    }
}

/// Per-equipment availability index over one request snapshot
#[derive(Debug)]
pub struct AvailabilityIndex {
    timelines: HashMap<i32, EquipmentTimeline>,
    baselines: HashMap<i32, EquipmentStatus>,
}

impl AvailabilityIndex {
    /// Index a snapshot of the equipment directory and request store.
    ///
    /// A request whose window is reversed should have been rejected at
    /// creation; one reaching this point is a programming error and fails
    /// the whole build rather than being skipped.
    pub fn build(
        equipment: &[Equipment],
        requests: &[MaintenanceStopRequest],
    ) -> AppResult<Self> {
        for request in requests {
            if request.date_end < request.date_start {
                return Err(AppError::Computation(format!(
                    "Stop request {} has date_end before date_start",
                    request.id
                )));
            }
        }

        let baselines: HashMap<i32, EquipmentStatus> = equipment
            .iter()
            .map(|e| (e.id, baseline_status(e)))
            .collect();

        let mut spans: HashMap<i32, Vec<(i64, i64, EquipmentStatus, i32)>> = HashMap::new();
        for request in requests {
            let first = first_covered_slot(request);
            let last = last_covered_slot(request);
            let status = EquipmentStatus::from(request.status);
            for equipment_id in &request.equipment_ids {
                if baselines.contains_key(equipment_id) {
                    spans
                        .entry(*equipment_id)
                        .or_default()
                        .push((first, last, status, request.id));
                }
            }
        }

        let timelines = spans
            .into_iter()
            .map(|(id, spans)| (id, EquipmentTimeline::build(spans)))
            .collect();

        Ok(Self {
            timelines,
            baselines,
        })
    }

    /// Resolved status for one equipment/slot, baseline when uncovered
    pub fn status_at(
        &self,
        equipment_id: i32,
        date: NaiveDate,
        is_morning: bool,
    ) -> AppResult<EquipmentStatus> {
        let baseline = self.baseline(equipment_id).ok_or_else(|| {
            AppError::NotFound(format!("Equipment {} not found", equipment_id))
        })?;
        let slot = slot_index(date, is_morning);
        Ok(self
            .timelines
            .get(&equipment_id)
            .and_then(|t| t.status_at(slot))
            .unwrap_or(baseline))
    }

    pub(crate) fn timeline(&self, equipment_id: i32) -> Option<&EquipmentTimeline> {
        self.timelines.get(&equipment_id)
    }

    pub(crate) fn baseline(&self, equipment_id: i32) -> Option<EquipmentStatus> {
        self.baselines.get(&equipment_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::super::{resolver::resolve, testutil::*};
    use super::*;
    use crate::models::enums::HalfDayBound;

    fn overlapping_fixture() -> (Vec<Equipment>, Vec<MaintenanceStopRequest>) {
        let fleet = vec![equipment(1, None), equipment(2, Some(1))];
        let requests = vec![
            stop_request(
                1,
                vec![1, 2],
                date(2024, 3, 10),
                date(2024, 3, 14),
                HalfDayBound::Afternoon,
                HalfDayBound::FullDay,
                EquipmentStatus::UnderMaintenance,
            ),
            stop_request(
                2,
                vec![1],
                date(2024, 3, 12),
                date(2024, 3, 16),
                HalfDayBound::FullDay,
                HalfDayBound::Morning,
                EquipmentStatus::OutOfService,
            ),
            stop_request(
                3,
                vec![2],
                date(2024, 3, 20),
                date(2024, 3, 20),
                HalfDayBound::Morning,
                HalfDayBound::FullDay,
                EquipmentStatus::OutOfService,
            ),
        ];
        (fleet, requests)
    }

    #[test]
    fn test_index_agrees_with_direct_resolver() {
        let (fleet, requests) = overlapping_fixture();
        let index = AvailabilityIndex::build(&fleet, &requests).unwrap();

        let mut day = date(2024, 3, 1);
        while day <= date(2024, 3, 31) {
            for is_morning in [true, false] {
                for unit in &fleet {
                    let direct = resolve(unit.id, day, is_morning, &requests, &fleet).unwrap();
                    let indexed = index.status_at(unit.id, day, is_morning).unwrap();
                    assert_eq!(direct, indexed, "{} {} morning={}", unit.id, day, is_morning);
                }
            }
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_overlap_resolved_by_severity() {
        let (fleet, requests) = overlapping_fixture();
        let index = AvailabilityIndex::build(&fleet, &requests).unwrap();

        // Overlap of requests 1 and 2 on equipment 1: out_of_service wins
        assert_eq!(
            index.status_at(1, date(2024, 3, 13), true).unwrap(),
            EquipmentStatus::OutOfService
        );
        // Before the overlap only request 1 covers
        assert_eq!(
            index.status_at(1, date(2024, 3, 11), true).unwrap(),
            EquipmentStatus::UnderMaintenance
        );
        // Request 2 ends with the morning of the 16th
        assert_eq!(
            index.status_at(1, date(2024, 3, 16), true).unwrap(),
            EquipmentStatus::OutOfService
        );
        assert_eq!(
            index.status_at(1, date(2024, 3, 16), false).unwrap(),
            EquipmentStatus::Operational
        );
    }

    #[test]
    fn test_uncovered_slot_falls_back_to_baseline() {
        let (fleet, requests) = overlapping_fixture();
        let index = AvailabilityIndex::build(&fleet, &requests).unwrap();
        assert_eq!(
            index.status_at(1, date(2024, 2, 1), true).unwrap(),
            EquipmentStatus::Operational
        );
        assert_eq!(
            index.status_at(2, date(2024, 2, 1), true).unwrap(),
            EquipmentStatus::UnderMaintenance
        );
    }

    #[test]
    fn test_unknown_equipment_rejected() {
        let (fleet, requests) = overlapping_fixture();
        let index = AvailabilityIndex::build(&fleet, &requests).unwrap();
        assert!(matches!(
            index.status_at(99, date(2024, 3, 13), true),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_reversed_window_fails_build() {
        let fleet = vec![equipment(1, None)];
        let request = stop_request(
            1,
            vec![1],
            date(2024, 3, 14),
            date(2024, 3, 10),
            HalfDayBound::FullDay,
            HalfDayBound::FullDay,
            EquipmentStatus::UnderMaintenance,
        );
        let err = AvailabilityIndex::build(&fleet, &[request]).unwrap_err();
        assert!(matches!(err, AppError::Computation(_)));
    }

    #[test]
    fn test_adjacent_equal_status_segments_merge() {
        let fleet = vec![equipment(1, None)];
        let requests = vec![
            stop_request(
                1,
                vec![1],
                date(2024, 5, 1),
                date(2024, 5, 3),
                HalfDayBound::FullDay,
                HalfDayBound::FullDay,
                EquipmentStatus::UnderMaintenance,
            ),
            stop_request(
                2,
                vec![1],
                date(2024, 5, 4),
                date(2024, 5, 6),
                HalfDayBound::FullDay,
                HalfDayBound::FullDay,
                EquipmentStatus::UnderMaintenance,
            ),
        ];
        let index = AvailabilityIndex::build(&fleet, &requests).unwrap();
        let timeline = index.timeline(1).unwrap();
        assert_eq!(timeline.segments.len(), 1);
        let mut day = date(2024, 5, 1);
        while day <= date(2024, 5, 6) {
            assert_eq!(
                index.status_at(1, day, true).unwrap(),
                EquipmentStatus::UnderMaintenance
            );
            day = day.succ_opt().unwrap();
        }
    }
}
