pub mod admin;
pub mod classes;
pub mod notifications;
pub mod students;
