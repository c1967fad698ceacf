use axum::{
    Router,
    routing::{delete, get},
};

use crate::modules::admin::controller::{health_check, reset};
use crate::state::AppState;
use crate::utils::fallback::{only_delete, only_get};

/// Routes mounted under `/api`.
pub fn init_admin_router() -> Router<AppState> {
    Router::new().route("/reset", delete(reset).fallback(only_delete))
}

/// Routes mounted at the root.
pub fn init_health_router() -> Router<AppState> {
    Router::new().route("/health", get(health_check).fallback(only_get))
}
