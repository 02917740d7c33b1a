//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{availability, equipment, health, stats, stop_requests};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Atelia API",
        version = "1.0.0",
        description = "Maintenance Management System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Atelia Team", email = "contact@atelia.org")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Stop requests
        stop_requests::list_stop_requests,
        stop_requests::get_stop_request,
        stop_requests::create_stop_request,
        stop_requests::update_stop_request,
        stop_requests::delete_stop_request,
        // Availability
        availability::get_calendar,
        availability::resolve_slot,
        // Stats
        stats::get_availability_stats,
    ),
    components(
        schemas(
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            // Stop requests
            crate::models::stop_request::MaintenanceStopRequest,
            crate::models::stop_request::CreateStopRequest,
            crate::models::stop_request::UpdateStopRequest,
            // Enums
            crate::models::enums::EquipmentStatus,
            crate::models::enums::HalfDayBound,
            // Availability
            availability::CalendarResponse,
            availability::EquipmentCalendar,
            availability::DayAvailability,
            availability::SlotResponse,
            // Stats
            stats::AvailabilityStatsResponse,
            stats::EquipmentAvailabilityStats,
            crate::scheduler::AnnualAvailability,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment directory"),
        (name = "stop-requests", description = "Maintenance-stop requests"),
        (name = "availability", description = "Resolved availability calendar"),
        (name = "stats", description = "Availability statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
