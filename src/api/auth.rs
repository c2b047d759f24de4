//! Authentication endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        guest::{RegisterGuest, RegisteredGuest},
        session::SessionClaims,
    },
    AppState,
};

use super::{ApiJson, AuthenticatedSession};

/// Login request
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Guest login response
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuestLoginResponse {
    /// JWT access token
    pub token: String,
    pub guest_id: Uuid,
    pub email: String,
    pub name: String,
}

/// Administrator login response
#[derive(Serialize, ToSchema)]
pub struct AdminLoginResponse {
    /// JWT access token
    pub token: String,
    pub email: String,
}

/// Register a guest account
#[utoipa::path(
    post,
    path = "/auth/guest/register",
    tag = "auth",
    request_body = RegisterGuest,
    responses(
        (status = 201, description = "Guest registered", body = RegisteredGuest),
        (status = 400, description = "Invalid input or email already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn register_guest(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterGuest>,
) -> AppResult<(StatusCode, Json<RegisteredGuest>)> {
    let guest = state.services.auth.register(request).await?;
    Ok((StatusCode::CREATED, Json(guest.into())))
}

/// Authenticate a guest
#[utoipa::path(
    post,
    path = "/auth/guest/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = GuestLoginResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse)
    )
)]
pub async fn guest_login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> AppResult<Json<GuestLoginResponse>> {
    let (token, guest) = state
        .services
        .auth
        .guest_login(&request.email, &request.password)
        .await?;

    Ok(Json(GuestLoginResponse {
        token,
        guest_id: guest.id,
        email: guest.email,
        name: guest.name,
    }))
}

/// Authenticate an administrator
#[utoipa::path(
    post,
    path = "/auth/admin/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AdminLoginResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse)
    )
)]
pub async fn admin_login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> AppResult<Json<AdminLoginResponse>> {
    let (token, admin) = state
        .services
        .auth
        .admin_login(&request.email, &request.password)
        .await?;

    Ok(Json(AdminLoginResponse {
        token,
        email: admin.email,
    }))
}

/// Current session
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Session claims", body = SessionClaims),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn me(AuthenticatedSession(claims): AuthenticatedSession) -> Json<SessionClaims> {
    Json(claims)
}
