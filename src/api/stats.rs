//! Statistics endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, services::stats::DashboardStats, AppState};

use super::AuthenticatedSession;

/// Dashboard counters
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStats),
        (status = 403, description = "Administrator privileges required", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_stats(
    State(state): State<AppState>,
    AuthenticatedSession(claims): AuthenticatedSession,
) -> AppResult<Json<DashboardStats>> {
    claims.require_admin()?;

    let stats = state.services.stats.dashboard().await?;
    Ok(Json(stats))
}
