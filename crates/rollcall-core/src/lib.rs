//! # Rollcall Core
//!
//! Core error types for the Rollcall API.
//!
//! - [`errors`]: [`AppError`] and the JSON error envelope it renders
//!
//! # Example
//!
//! ```ignore
//! use rollcall_core::AppError;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Student not found."));
//! ```

pub mod errors;

pub use errors::{AppError, ErrorResponse};
