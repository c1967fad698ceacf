//! Fallback handlers that keep every error response in the JSON envelope.
//!
//! Route-level method fallbacks are attached with `MethodRouter::fallback`,
//! e.g. `post(register_students).fallback(only_post)`.

use anyhow::anyhow;
use axum::http::Uri;

use crate::utils::errors::AppError;

pub async fn only_get() -> AppError {
    AppError::method_not_allowed(anyhow!("Only GET is allowed."))
}

pub async fn only_post() -> AppError {
    AppError::method_not_allowed(anyhow!("Only POST is allowed."))
}

pub async fn only_delete() -> AppError {
    AppError::method_not_allowed(anyhow!("Only DELETE is allowed."))
}

pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found(anyhow!("No route for {}", uri.path()))
}
