use utoipa::OpenApi;

use crate::modules::classes::model::{CommonStudentsResponse, RegisterStudentsDto};
use crate::modules::notifications::model::{RecipientsResponse, RetrieveNotificationsDto};
use crate::modules::students::model::SuspendStudentDto;
use crate::utils::errors::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::classes::controller::register_students,
        crate::modules::classes::controller::common_students,
        crate::modules::students::controller::suspend_student,
        crate::modules::notifications::controller::retrieve_for_notifications,
        crate::modules::admin::controller::reset,
        crate::modules::admin::controller::health_check,
    ),
    components(
        schemas(
            RegisterStudentsDto,
            CommonStudentsResponse,
            SuspendStudentDto,
            RetrieveNotificationsDto,
            RecipientsResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Classes", description = "Teacher and student registration"),
        (name = "Students", description = "Student status"),
        (name = "Notifications", description = "Notification recipients"),
        (name = "Admin", description = "Maintenance and health"),
    ),
    info(
        title = "Rollcall API",
        version = "0.1.0",
        description = "Classroom administration API for teachers and their students",
    )
)]
pub struct ApiDoc;
