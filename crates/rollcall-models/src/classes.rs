//! Class membership models and the registration DTO.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// One teacher/student pair. The pair is unique.
#[derive(Serialize, FromRow, Debug, Clone, ToSchema)]
pub struct ClassMembership {
    pub teacher_email: String,
    pub student_email: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/register`.
///
/// Duplicates and order in `students` do not affect the outcome.
#[derive(Deserialize, Debug, Default, ToSchema, Validate)]
#[validate(schema(function = "validate_registration"))]
pub struct RegisterStudentsDto {
    #[serde(default)]
    pub teacher: String,
    #[serde(default)]
    pub students: Vec<String>,
}

fn validate_registration(dto: &RegisterStudentsDto) -> Result<(), ValidationError> {
    if dto.teacher.is_empty() && dto.students.is_empty() {
        return Err(ValidationError::new("empty_registration").with_message(Cow::Borrowed(
            "teacher and students must not both be empty",
        )));
    }
    Ok(())
}
