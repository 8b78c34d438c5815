//! Server application models.
//!
//! Application state shared by every handler and the session-backed admin state.

pub mod app;
pub mod session;
