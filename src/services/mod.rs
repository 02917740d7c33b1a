//! Business logic services

pub mod availability;
pub mod equipment;
pub mod stats;
pub mod stop_requests;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub stop_requests: stop_requests::StopRequestsService,
    pub availability: availability::AvailabilityService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(repository.clone()),
            stop_requests: stop_requests::StopRequestsService::new(repository.clone()),
            availability: availability::AvailabilityService::new(repository.clone()),
            stats: stats::StatsService::new(repository),
        }
    }
}
