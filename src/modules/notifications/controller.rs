use axum::{Json, extract::State};
use tracing::instrument;

use crate::metrics::track_notification_recipients;
use crate::modules::notifications::model::{RecipientsResponse, RetrieveNotificationsDto};
use crate::modules::notifications::service::NotificationService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use crate::validator::ValidatedJson;

/// Recipients of a notification: the teacher's students plus any
/// @-mentioned students, excluding suspended students.
#[utoipa::path(
    post,
    path = "/api/retrievefornotifications",
    request_body = RetrieveNotificationsDto,
    responses(
        (status = 200, description = "Students who can receive the notification", body = RecipientsResponse),
        (status = 400, description = "Empty or malformed body", body = ErrorResponse),
        (status = 404, description = "Teacher not found", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 415, description = "Content-Type is not application/json", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Notifications"
)]
#[instrument(skip(state))]
pub async fn retrieve_for_notifications(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RetrieveNotificationsDto>,
) -> Result<Json<RecipientsResponse>, AppError> {
    let recipients = NotificationService::retrieve_recipients(&state.db, &dto).await?;
    track_notification_recipients(recipients.len());

    Ok(Json(RecipientsResponse { recipients }))
}
