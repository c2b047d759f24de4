//! Facility booking endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::booking::{BookingQuery, CreateFacilityBooking, FacilityBooking, FacilityBookingDetails},
    AppState,
};

use super::{bookings::listed_guest, ApiJson, ApiQuery, AuthenticatedSession};

/// Book a facility slot
#[utoipa::path(
    post,
    path = "/facility-bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    request_body = CreateFacilityBooking,
    responses(
        (status = 200, description = "Booking created", body = FacilityBooking),
        (status = 400, description = "Missing fields, closed, or at capacity", body = crate::error::ErrorResponse),
        (status = 404, description = "Facility or guest not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_facility_booking(
    State(state): State<AppState>,
    AuthenticatedSession(claims): AuthenticatedSession,
    ApiJson(request): ApiJson<CreateFacilityBooking>,
) -> AppResult<Json<FacilityBooking>> {
    let booking = state
        .services
        .bookings
        .create_facility_booking(&claims, request)
        .await?;
    Ok(Json(booking))
}

/// List a guest's facility bookings
#[utoipa::path(
    get,
    path = "/facility-bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(BookingQuery),
    responses(
        (status = 200, description = "Bookings with their facilities", body = Vec<FacilityBookingDetails>),
        (status = 400, description = "Guest ID is required", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_facility_bookings(
    State(state): State<AppState>,
    AuthenticatedSession(claims): AuthenticatedSession,
    ApiQuery(query): ApiQuery<BookingQuery>,
) -> AppResult<Json<Vec<FacilityBookingDetails>>> {
    let guest_id = listed_guest(&claims, &query)?;
    let bookings = state.services.bookings.list_facility_bookings(guest_id).await?;
    Ok(Json(bookings))
}
