use anyhow::{Context, anyhow};
use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::modules::notifications::model::{RetrieveNotificationsDto, Teacher, extract_mentions};
use crate::utils::errors::AppError;

pub struct NotificationService;

impl NotificationService {
    #[instrument(skip(db))]
    pub async fn find_teacher(db: &PgPool, email: &str) -> Result<Option<Teacher>, AppError> {
        sqlx::query_as::<_, Teacher>(
            "SELECT teacher_email, created_at FROM teachers WHERE teacher_email = $1",
        )
        .bind(email)
        .fetch_optional(db)
        .await
        .context("Failed to fetch teacher")
        .map_err(AppError::database)
    }

    /// Students who should receive `dto.notification`.
    ///
    /// The union of the teacher's students and the @-mentioned students,
    /// minus anyone suspended. A non-empty `teacher` must be registered.
    #[instrument(skip(db, dto), fields(teacher = %dto.teacher))]
    pub async fn retrieve_recipients(
        db: &PgPool,
        dto: &RetrieveNotificationsDto,
    ) -> Result<Vec<String>, AppError> {
        if !dto.teacher.is_empty() && Self::find_teacher(db, &dto.teacher).await?.is_none() {
            return Err(AppError::not_found(anyhow!("Teacher not found.")));
        }

        let mentions = extract_mentions(&dto.notification);
        debug!(mentions = ?mentions, "Parsed notification mentions");

        // `= ANY('{}')` would be valid SQL, but the teacher-only statement is
        // kept separate so the mention clause is never sent empty.
        let recipients = if mentions.is_empty() {
            sqlx::query_scalar::<_, String>(
                r#"SELECT DISTINCT c.student_email
                   FROM class_memberships c
                   JOIN students s ON s.student_email = c.student_email
                   WHERE NOT s.is_suspended
                     AND c.teacher_email = $1
                   ORDER BY c.student_email"#,
            )
            .bind(&dto.teacher)
            .fetch_all(db)
            .await
        } else {
            sqlx::query_scalar::<_, String>(
                r#"SELECT DISTINCT c.student_email
                   FROM class_memberships c
                   JOIN students s ON s.student_email = c.student_email
                   WHERE NOT s.is_suspended
                     AND (c.teacher_email = $1 OR c.student_email = ANY($2))
                   ORDER BY c.student_email"#,
            )
            .bind(&dto.teacher)
            .bind(&mentions)
            .fetch_all(db)
            .await
        }
        .context("Failed to fetch notification recipients")
        .map_err(AppError::database)?;

        Ok(recipients)
    }
}
