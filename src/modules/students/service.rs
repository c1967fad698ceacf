use crate::{modules::students::model::Student, utils::errors::AppError};
use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

pub struct StudentService;

impl StudentService {
    /// Marks the student as suspended. Suspending twice is not an error.
    #[instrument(skip(db))]
    pub async fn suspend_student(db: &PgPool, email: &str) -> Result<Student, AppError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            UPDATE students
            SET is_suspended = TRUE
            WHERE student_email = $1
            RETURNING student_email, is_suspended, created_at
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
        .context("Failed to suspend student")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Student not found.")))?;

        Ok(student)
    }
}
