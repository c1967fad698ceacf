use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A teacher, identified by email (exact, case-sensitive match).
#[derive(Serialize, FromRow, Debug, Clone, ToSchema)]
pub struct Teacher {
    #[sqlx(rename = "teacher_email")]
    pub email: String,
    pub created_at: DateTime<Utc>,
}
