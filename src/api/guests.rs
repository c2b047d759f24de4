//! Guest administration endpoints

use axum::{extract::State, Json};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::guest::{GuestProfile, Membership, UpsertMembership},
    AppState,
};

use super::{ApiJson, ApiPath, AuthenticatedSession, MessageResponse};

/// Get a guest with membership
#[utoipa::path(
    get,
    path = "/guests/{id}",
    tag = "guests",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Guest ID")),
    responses(
        (status = 200, description = "Guest profile", body = GuestProfile),
        (status = 404, description = "Guest not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_guest(
    State(state): State<AppState>,
    AuthenticatedSession(claims): AuthenticatedSession,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<GuestProfile>> {
    claims.require_admin()?;

    let profile = state.services.guests.get_profile(id).await?;
    Ok(Json(profile))
}

/// Grant or update a membership
#[utoipa::path(
    put,
    path = "/guests/{id}/membership",
    tag = "guests",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Guest ID")),
    request_body = UpsertMembership,
    responses(
        (status = 200, description = "Membership saved", body = Membership),
        (status = 404, description = "Guest not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn upsert_membership(
    State(state): State<AppState>,
    AuthenticatedSession(claims): AuthenticatedSession,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<UpsertMembership>,
) -> AppResult<Json<Membership>> {
    claims.require_admin()?;

    let membership = state.services.guests.upsert_membership(id, request).await?;
    Ok(Json(membership))
}

/// Revoke a membership
#[utoipa::path(
    delete,
    path = "/guests/{id}/membership",
    tag = "guests",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Guest ID")),
    responses(
        (status = 200, description = "Membership revoked", body = MessageResponse),
        (status = 404, description = "Guest or membership not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn revoke_membership(
    State(state): State<AppState>,
    AuthenticatedSession(claims): AuthenticatedSession,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    claims.require_admin()?;

    state.services.guests.revoke_membership(id).await?;
    Ok(Json(MessageResponse::new("Membership revoked")))
}
