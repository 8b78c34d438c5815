//! Data access layer.
//!
//! The inventory backend is the only data store. Repositories wrap a shared
//! [`BackendClient`] and are organized by the part of the backend they talk to: admin
//! login, the authenticated inventory collections, and the public listings.

pub mod auth;
pub mod client;
pub mod inventory;
pub mod public;

pub use client::BackendClient;
