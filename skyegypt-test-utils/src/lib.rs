//! Shared test harness for the Sky Egypt server.
//!
//! Tests declare the backend behaviour they need on a [`TestBuilder`], then receive a
//! [`TestContext`] holding a mock backend server and a fresh in-memory session.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_AUTH_TOKEN, TEST_PASSWORD, TEST_USERNAME, TEST_USER_AGENT},
        fixtures::factory,
        TestBuilder, TestContext, TestError,
    };
}
