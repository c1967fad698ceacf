//! Fake classroom data.
//!
//! Registrations go through `ClassService::register_students`, the same code
//! the `/api/register` handler runs.

pub mod classes;
pub mod models;

pub use classes::{generate_classes, seed_classes};
pub use models::{ClassSeed, SeedConfig};
