//! Integration tests for the HTTP controllers.
//!
//! Handlers are called directly with a mock backend behind the [`AppState`] and an
//! in-memory session, so each test controls both what the backend answers and
//! whether an admin is logged in.

mod auth;
mod dashboard;
mod inventory;
mod trip;

use axum::response::Response;
use serde_json::Value;
use skyegypt::server::model::{app::AppState, session::auth::SessionAuthToken};
use skyegypt_test_utils::prelude::*;

/// Stores the test bearer token as if the admin had logged in
async fn log_in(test: &TestContext) {
    SessionAuthToken::insert(&test.session, TEST_AUTH_TOKEN)
        .await
        .unwrap();
}

fn app_state(test: &TestContext) -> AppState {
    test.to_app_state()
}

async fn body_json(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
