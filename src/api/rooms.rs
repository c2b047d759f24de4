//! Room inventory endpoints

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::room::{CreateRoom, Room, RoomDetails, UpdateRoom},
    AppState,
};

use super::{ApiJson, ApiPath, AuthenticatedSession, MessageResponse};

/// List all rooms
#[utoipa::path(
    get,
    path = "/rooms",
    tag = "rooms",
    responses(
        (status = 200, description = "Rooms ordered by number", body = Vec<Room>)
    )
)]
pub async fn list_rooms(State(state): State<AppState>) -> AppResult<Json<Vec<Room>>> {
    let rooms = state.services.rooms.list().await?;
    Ok(Json(rooms))
}

/// Get a room with its bookings
#[utoipa::path(
    get,
    path = "/rooms/{id}",
    tag = "rooms",
    params(("id" = Uuid, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room details", body = RoomDetails),
        (status = 404, description = "Room not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_room(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<RoomDetails>> {
    let room = state.services.rooms.get(id).await?;
    Ok(Json(room))
}

/// Create a room
#[utoipa::path(
    post,
    path = "/rooms",
    tag = "rooms",
    security(("bearer_auth" = [])),
    request_body = CreateRoom,
    responses(
        (status = 201, description = "Room created", body = Room),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 409, description = "Room number already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_room(
    State(state): State<AppState>,
    AuthenticatedSession(claims): AuthenticatedSession,
    ApiJson(room): ApiJson<CreateRoom>,
) -> AppResult<(StatusCode, Json<Room>)> {
    claims.require_admin()?;

    let created = state.services.rooms.create(room).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a room
#[utoipa::path(
    put,
    path = "/rooms/{id}",
    tag = "rooms",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Room ID")),
    request_body = UpdateRoom,
    responses(
        (status = 200, description = "Room updated", body = Room),
        (status = 404, description = "Room not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_room(
    State(state): State<AppState>,
    AuthenticatedSession(claims): AuthenticatedSession,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(room): ApiJson<UpdateRoom>,
) -> AppResult<Json<Room>> {
    claims.require_admin()?;

    let updated = state.services.rooms.update(id, room).await?;
    Ok(Json(updated))
}

/// Delete a room without active bookings
#[utoipa::path(
    delete,
    path = "/rooms/{id}",
    tag = "rooms",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room deleted", body = MessageResponse),
        (status = 400, description = "Room has active bookings", body = crate::error::ErrorResponse),
        (status = 404, description = "Room not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_room(
    State(state): State<AppState>,
    AuthenticatedSession(claims): AuthenticatedSession,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    claims.require_admin()?;

    state.services.rooms.delete(id).await?;
    Ok(Json(MessageResponse::new("Room deleted successfully")))
}
