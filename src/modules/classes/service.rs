use anyhow::Context;
use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::modules::classes::model::{ClassMembership, RegisterStudentsDto};
use crate::utils::errors::AppError;

pub struct ClassService;

impl ClassService {
    /// Ensures the teacher, each student and each membership exist.
    ///
    /// Statements run one after another without a transaction; a failure
    /// leaves earlier inserts in place. Returns the number of memberships that
    /// did not exist before.
    #[instrument(skip(db, dto), fields(teacher = %dto.teacher, students = dto.students.len()))]
    pub async fn register_students(
        db: &PgPool,
        dto: &RegisterStudentsDto,
    ) -> Result<usize, AppError> {
        sqlx::query("INSERT INTO teachers (teacher_email) VALUES ($1) ON CONFLICT DO NOTHING")
            .bind(&dto.teacher)
            .execute(db)
            .await
            .context("Failed to insert teacher")
            .map_err(AppError::database)?;

        let mut created = 0;
        for student in &dto.students {
            sqlx::query("INSERT INTO students (student_email) VALUES ($1) ON CONFLICT DO NOTHING")
                .bind(student)
                .execute(db)
                .await
                .context("Failed to insert student")
                .map_err(AppError::database)?;

            let membership = sqlx::query_as::<_, ClassMembership>(
                r#"INSERT INTO class_memberships (teacher_email, student_email)
                   VALUES ($1, $2)
                   ON CONFLICT DO NOTHING
                   RETURNING teacher_email, student_email, created_at"#,
            )
            .bind(&dto.teacher)
            .bind(student)
            .fetch_optional(db)
            .await
            .context("Failed to insert class membership")
            .map_err(AppError::database)?;

            if let Some(membership) = membership {
                debug!(
                    teacher = %membership.teacher_email,
                    student = %membership.student_email,
                    "Class membership created"
                );
                created += 1;
            }
        }

        Ok(created)
    }

    /// Students registered under every one of `teachers`.
    ///
    /// A student qualifies when its membership count across the named
    /// teachers equals the number of teachers. With no teachers, every
    /// student is returned. `teachers` must not contain repeats.
    #[instrument(skip(db))]
    pub async fn common_students(db: &PgPool, teachers: &[String]) -> Result<Vec<String>, AppError> {
        let students = if teachers.is_empty() {
            sqlx::query_scalar::<_, String>(
                "SELECT student_email FROM students ORDER BY student_email",
            )
            .fetch_all(db)
            .await
        } else {
            sqlx::query_scalar::<_, String>(
                r#"SELECT student_email
                   FROM class_memberships
                   WHERE teacher_email = ANY($1)
                   GROUP BY student_email
                   HAVING COUNT(*) = $2
                   ORDER BY student_email"#,
            )
            .bind(teachers)
            .bind(teachers.len() as i64)
            .fetch_all(db)
            .await
        }
        .context("Failed to fetch common students")
        .map_err(AppError::database)?;

        Ok(students)
    }
}
