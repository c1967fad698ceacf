use anyhow::anyhow;
use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::{Query, QueryRejection};
use tracing::instrument;

use crate::metrics::track_students_registered;
use crate::modules::classes::model::{
    CommonStudentsQuery, CommonStudentsResponse, RegisterStudentsDto,
};
use crate::modules::classes::service::ClassService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterStudentsDto,
    responses(
        (status = 204, description = "Teacher and students registered"),
        (status = 400, description = "Empty or malformed body", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 415, description = "Content-Type is not application/json", body = ErrorResponse),
        (status = 422, description = "Teacher and students are both empty", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn register_students(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterStudentsDto>,
) -> Result<StatusCode, AppError> {
    let created = ClassService::register_students(&state.db, &dto).await?;
    track_students_registered(&dto.teacher, created);

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/commonstudents",
    params(CommonStudentsQuery),
    responses(
        (status = 200, description = "Students registered under every given teacher", body = CommonStudentsResponse),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn common_students(
    State(state): State<AppState>,
    query: Result<Query<CommonStudentsQuery>, QueryRejection>,
) -> Result<Json<CommonStudentsResponse>, AppError> {
    let Query(query) =
        query.map_err(|rejection| AppError::bad_request(anyhow!("{}", rejection.body_text())))?;

    let students = ClassService::common_students(&state.db, &query.distinct_teachers()).await?;

    Ok(Json(CommonStudentsResponse { students }))
}
