//! Facility inventory endpoints

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::facility::{CreateFacility, FacilityDetails, FacilityWithHours, UpdateFacility},
    AppState,
};

use super::{ApiJson, ApiPath, AuthenticatedSession, MessageResponse};

/// List all facilities with their operating hours
#[utoipa::path(
    get,
    path = "/facilities",
    tag = "facilities",
    responses(
        (status = 200, description = "Facilities ordered by name", body = Vec<FacilityWithHours>)
    )
)]
pub async fn list_facilities(State(state): State<AppState>) -> AppResult<Json<Vec<FacilityWithHours>>> {
    let facilities = state.services.facilities.list().await?;
    Ok(Json(facilities))
}

/// Get a facility with operating hours and bookings
#[utoipa::path(
    get,
    path = "/facilities/{id}",
    tag = "facilities",
    params(("id" = Uuid, Path, description = "Facility ID")),
    responses(
        (status = 200, description = "Facility details", body = FacilityDetails),
        (status = 404, description = "Facility not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_facility(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<FacilityDetails>> {
    let facility = state.services.facilities.get(id).await?;
    Ok(Json(facility))
}

/// Create a facility with its operating hours
#[utoipa::path(
    post,
    path = "/facilities",
    tag = "facilities",
    security(("bearer_auth" = [])),
    request_body = CreateFacility,
    responses(
        (status = 201, description = "Facility created", body = FacilityWithHours),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_facility(
    State(state): State<AppState>,
    AuthenticatedSession(claims): AuthenticatedSession,
    ApiJson(facility): ApiJson<CreateFacility>,
) -> AppResult<(StatusCode, Json<FacilityWithHours>)> {
    claims.require_admin()?;

    let created = state.services.facilities.create(facility).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a facility; `operatingHours` replaces the full set when present
#[utoipa::path(
    put,
    path = "/facilities/{id}",
    tag = "facilities",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Facility ID")),
    request_body = UpdateFacility,
    responses(
        (status = 200, description = "Facility updated", body = FacilityWithHours),
        (status = 404, description = "Facility not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_facility(
    State(state): State<AppState>,
    AuthenticatedSession(claims): AuthenticatedSession,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(facility): ApiJson<UpdateFacility>,
) -> AppResult<Json<FacilityWithHours>> {
    claims.require_admin()?;

    let updated = state.services.facilities.update(id, facility).await?;
    Ok(Json(updated))
}

/// Delete a facility without active bookings
#[utoipa::path(
    delete,
    path = "/facilities/{id}",
    tag = "facilities",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Facility ID")),
    responses(
        (status = 200, description = "Facility deleted", body = MessageResponse),
        (status = 400, description = "Facility has active bookings", body = crate::error::ErrorResponse),
        (status = 404, description = "Facility not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_facility(
    State(state): State<AppState>,
    AuthenticatedSession(claims): AuthenticatedSession,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    claims.require_admin()?;

    state.services.facilities.delete(id).await?;
    Ok(Json(MessageResponse::new("Facility deleted successfully")))
}
