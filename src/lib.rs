//! Atelia Maintenance Management System
//!
//! A Rust implementation of the Atelia maintenance-management server,
//! providing a REST JSON API over equipment, maintenance-stop requests and
//! resolved availability. The half-day availability scheduler lives in
//! [`scheduler`] as a pure module; everything else is plumbing around it.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod scheduler;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
