use anyhow::Context;
use sqlx::PgPool;
use tracing::{instrument, warn};

use crate::utils::errors::AppError;

pub struct AdminService;

impl AdminService {
    /// Removes every teacher, student and class membership.
    #[instrument(skip(db))]
    pub async fn reset(db: &PgPool) -> Result<(), AppError> {
        sqlx::query("TRUNCATE TABLE class_memberships, students, teachers")
            .execute(db)
            .await
            .context("Failed to reset classroom data")
            .map_err(AppError::database)?;

        warn!("All teachers, students and class memberships removed");

        Ok(())
    }

    pub async fn ping(db: &PgPool) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(db)
            .await
            .context("Database is unreachable")
            .map_err(AppError::database)?;

        Ok(())
    }
}
