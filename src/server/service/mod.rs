//! Service layer for business logic and orchestration.
//!
//! Services validate input, coordinate the backend repositories, and reshape backend
//! records into the DTOs the client renders. Session handling stays in the controllers.

pub mod auth;
pub mod dashboard;
pub mod inventory;
pub mod trip;
