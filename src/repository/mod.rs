//! Repository layer for database operations

pub mod equipment;
pub mod stop_requests;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub equipment: equipment::EquipmentRepository,
    pub stop_requests: stop_requests::StopRequestsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            stop_requests: stop_requests::StopRequestsRepository::new(pool.clone()),
            pool,
        }
    }
}
