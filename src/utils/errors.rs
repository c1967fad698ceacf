pub use rollcall_core::errors::{AppError, ErrorResponse};
