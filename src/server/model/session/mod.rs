//! Session data models.
//!
//! Type-safe wrappers over tower-sessions for the state an admin carries between
//! requests.

pub mod auth;
