use sqlx::PgPool;

use rollcall_config::{CorsConfig, DatabaseConfig, ServerConfig};
use rollcall_db::{init_db_pool, run_migrations};

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(db: PgPool) -> Self {
        Self {
            db,
            cors_config: CorsConfig::default(),
        }
    }
}

pub async fn init_app_state(server_config: &ServerConfig) -> anyhow::Result<AppState> {
    let db = init_db_pool(&DatabaseConfig::from_env()?).await?;

    if server_config.run_migrations {
        run_migrations(&db).await?;
    }

    Ok(AppState {
        db,
        cors_config: CorsConfig::from_env(),
    })
}
