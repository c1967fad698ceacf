use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};
use tracing::instrument;

use crate::metrics::track_classroom_reset;
use crate::modules::admin::service::AdminService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};

#[utoipa::path(
    delete,
    path = "/api/reset",
    responses(
        (status = 204, description = "All classroom data removed"),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn reset(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    AdminService::reset(&state.db).await?;
    track_classroom_reset();

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and database are reachable"),
        (status = 500, description = "Database is unreachable", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    AdminService::ping(&state.db).await?;

    Ok(Json(json!({ "status": "ok" })))
}
