use crate::metrics::track_student_suspended;
use crate::modules::students::model::SuspendStudentDto;
use crate::modules::students::service::StudentService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use crate::validator::ValidatedJson;
use axum::{extract::State, http::StatusCode};
use tracing::{info, instrument};

#[utoipa::path(
    post,
    path = "/api/suspend",
    request_body = SuspendStudentDto,
    responses(
        (status = 204, description = "Student suspended"),
        (status = 400, description = "Empty or malformed body", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 415, description = "Content-Type is not application/json", body = ErrorResponse),
        (status = 422, description = "Student is empty", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn suspend_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SuspendStudentDto>,
) -> Result<StatusCode, AppError> {
    let student = StudentService::suspend_student(&state.db, &dto.student).await?;
    info!(student = %student.email, "Student suspended");
    track_student_suspended();

    Ok(StatusCode::NO_CONTENT)
}
