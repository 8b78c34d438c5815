//! Fixtures for backend payloads and mock endpoints.
//!
//! - `factory` - JSON records shaped like the inventory backend's
//! - `backend` - mockito endpoints for the backend's routes

pub mod backend;
pub mod factory;
