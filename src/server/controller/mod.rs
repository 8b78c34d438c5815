//! HTTP controller endpoints for the Sky Egypt API.
//!
//! Axum handlers for admin login, the public trip listing, the admin dashboard, and
//! the per-collection inventory routes. Controllers own the session: they load the
//! [`AdminSession`](crate::server::model::session::auth::AdminSession), call a
//! service, and clear the session when the backend rejects its token.

pub mod auth;
pub mod dashboard;
pub mod inventory;
pub mod trip;
pub mod util;
