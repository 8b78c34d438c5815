//! Types shared between the browser client and the server.

pub mod api;
pub mod dashboard;
pub mod hotel;
pub mod inventory;
pub mod lenient;
pub mod resource;
pub mod safari;
pub mod sea_trip;
pub mod trip;
