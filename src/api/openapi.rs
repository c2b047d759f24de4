//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, bookings, facilities, facility_bookings, guests, health, rooms, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hotel API",
        version = "1.0.0",
        description = "Hotel rooms and facilities booking REST API"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::register_guest,
        auth::guest_login,
        auth::admin_login,
        auth::me,
        // Rooms
        rooms::list_rooms,
        rooms::get_room,
        rooms::create_room,
        rooms::update_room,
        rooms::delete_room,
        // Facilities
        facilities::list_facilities,
        facilities::get_facility,
        facilities::create_facility,
        facilities::update_facility,
        facilities::delete_facility,
        // Bookings
        bookings::create_booking,
        bookings::list_bookings,
        facility_bookings::create_facility_booking,
        facility_bookings::list_facility_bookings,
        // Guests
        guests::get_guest,
        guests::upsert_membership,
        guests::revoke_membership,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::GuestLoginResponse,
            auth::AdminLoginResponse,
            crate::models::session::SessionClaims,
            crate::models::session::SessionRole,
            crate::models::guest::RegisterGuest,
            crate::models::guest::RegisteredGuest,
            // Inventory
            crate::models::enums::ResourceStatus,
            crate::models::enums::RoomType,
            crate::models::enums::FacilityType,
            crate::models::enums::DayOfWeek,
            crate::models::room::Room,
            crate::models::room::RoomDetails,
            crate::models::room::CreateRoom,
            crate::models::room::UpdateRoom,
            crate::models::facility::Facility,
            crate::models::facility::OperatingHours,
            crate::models::facility::OperatingHoursInput,
            crate::models::facility::FacilityWithHours,
            crate::models::facility::FacilityDetails,
            crate::models::facility::CreateFacility,
            crate::models::facility::UpdateFacility,
            // Bookings
            crate::models::enums::BookingStatus,
            crate::models::booking::RoomBooking,
            crate::models::booking::RoomBookingDetails,
            crate::models::booking::CreateRoomBooking,
            crate::models::booking::FacilityBooking,
            crate::models::booking::FacilityBookingDetails,
            crate::models::booking::CreateFacilityBooking,
            // Guests
            crate::models::guest::Guest,
            crate::models::guest::GuestProfile,
            crate::models::guest::Membership,
            crate::models::guest::UpsertMembership,
            // Stats
            crate::services::stats::DashboardStats,
            // Common
            super::MessageResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Guest and administrator authentication"),
        (name = "rooms", description = "Room inventory"),
        (name = "facilities", description = "Facility inventory and operating hours"),
        (name = "bookings", description = "Room and facility bookings"),
        (name = "guests", description = "Guest profiles and memberships"),
        (name = "stats", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
