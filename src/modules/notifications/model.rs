//! Notification DTOs and mention parsing, re-exported from `rollcall-models`.

pub use rollcall_models::notifications::*;
pub use rollcall_models::teachers::Teacher;
