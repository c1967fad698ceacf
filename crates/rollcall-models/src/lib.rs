//! # Rollcall Models
//!
//! Domain models and DTOs for the Rollcall API.
//!
//! # Modules
//!
//! - [`teachers`]: the teacher entity
//! - [`students`]: the student entity, suspension and common-students DTOs
//! - [`classes`]: class membership entity and the registration DTO
//! - [`notifications`]: notification DTOs and @-mention extraction
//!
//! Every entity is created as a side effect of registration; nothing here
//! talks to the database on its own.

pub mod classes;
pub mod notifications;
pub mod students;
pub mod teachers;

pub use classes::{ClassMembership, RegisterStudentsDto};
pub use notifications::{RecipientsResponse, RetrieveNotificationsDto, extract_mentions};
pub use students::{CommonStudentsQuery, CommonStudentsResponse, Student, SuspendStudentDto};
pub use teachers::Teacher;
