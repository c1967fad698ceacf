//! # Rollcall CLI
//!
//! Database seeding and inspection utilities for Rollcall development.
//!
//! ## Usage
//!
//! ```ignore
//! use rollcall_cli::seeder::{seed_classes, SeedConfig};
//!
//! let config = SeedConfig::new(5, 100).with_students_per_teacher(20);
//! seed_classes(&pool, &config).await?;
//! ```

pub mod seeder;
pub mod stats;
