use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::classes::controller::{common_students, register_students};
use crate::state::AppState;
use crate::utils::fallback::{only_get, only_post};

pub fn init_classes_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_students).fallback(only_post))
        .route("/commonstudents", get(common_students).fallback(only_get))
}
