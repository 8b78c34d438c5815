//! Sky Egypt travel site and inventory console.
//!
//! `model` and `pipeline` compile for every target and are shared by the browser
//! client and the server. The `server` module is only built with the `server` feature.

pub mod model;
pub mod pipeline;

#[cfg(feature = "server")]
pub mod server;
