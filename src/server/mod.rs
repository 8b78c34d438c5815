//! Server application core modules.
//!
//! The server is a thin backend-for-frontend in front of the inventory REST backend.
//! It serves the Dioxus client, keeps the admin's bearer token in a server-side
//! session, and exposes JSON routes for the public trip listing, the admin dashboard,
//! and inventory management.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
