//! Room booking endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::{AppError, AppResult},
    models::{
        booking::{BookingQuery, CreateRoomBooking, RoomBooking, RoomBookingDetails},
        session::SessionClaims,
    },
    AppState,
};

use super::{ApiJson, ApiQuery, AuthenticatedSession};

/// Guest whose bookings are listed: the session guest, or the named one for admins
pub(crate) fn listed_guest(claims: &SessionClaims, query: &BookingQuery) -> AppResult<uuid::Uuid> {
    claims
        .acting_guest(query.guest_id)?
        .ok_or_else(|| AppError::BadRequest("Guest ID is required".to_string()))
}

/// Book a room
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    request_body = CreateRoomBooking,
    responses(
        (status = 201, description = "Booking created", body = RoomBooking),
        (status = 400, description = "Missing fields, room unavailable or over capacity", body = crate::error::ErrorResponse),
        (status = 403, description = "Booking for another guest", body = crate::error::ErrorResponse),
        (status = 404, description = "Room or guest not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    AuthenticatedSession(claims): AuthenticatedSession,
    ApiJson(request): ApiJson<CreateRoomBooking>,
) -> AppResult<(StatusCode, Json<RoomBooking>)> {
    let booking = state
        .services
        .bookings
        .create_room_booking(&claims, request)
        .await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// List a guest's room bookings
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(BookingQuery),
    responses(
        (status = 200, description = "Bookings with their rooms", body = Vec<RoomBookingDetails>),
        (status = 400, description = "Guest ID is required", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    AuthenticatedSession(claims): AuthenticatedSession,
    ApiQuery(query): ApiQuery<BookingQuery>,
) -> AppResult<Json<Vec<RoomBookingDetails>>> {
    let guest_id = listed_guest(&claims, &query)?;
    let bookings = state.services.bookings.list_room_bookings(guest_id).await?;
    Ok(Json(bookings))
}
