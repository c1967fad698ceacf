//! Utility modules for the Rollcall API.
//!
//! - [`errors`]: application error type (re-exported from `rollcall-core`)
//! - [`fallback`]: JSON fallbacks for unknown paths and disallowed methods

pub mod errors;
pub mod fallback;
