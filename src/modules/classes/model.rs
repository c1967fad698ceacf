//! Class membership models and DTOs.
//!
//! Re-exported from the `rollcall-models` crate.

pub use rollcall_models::classes::*;
pub use rollcall_models::students::{CommonStudentsQuery, CommonStudentsResponse};
