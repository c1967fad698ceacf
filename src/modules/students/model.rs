//! Student data models and DTOs.
//!
//! This module re-exports student models from the `rollcall-models` crate.

pub use rollcall_models::students::{Student, SuspendStudentDto};
