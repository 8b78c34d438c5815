//! Helpers shared by the admin controllers.

pub mod session;
