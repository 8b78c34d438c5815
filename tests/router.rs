//! Requests sent through the full API router, session layer included.
#![cfg(feature = "server")]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use skyegypt::server::{model::app::AppState, router::routes, startup::build_session_layer};
use skyegypt_test_utils::prelude::*;
use tower::ServiceExt;

fn app(test: &TestContext) -> Router {
    let state: AppState = test.to_app_state();

    routes().with_state(state).layer(build_session_layer())
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
/// Expect the public trip listing to need no session
async fn serves_trips_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_public_endpoint("/hotels/public", 200, factory::hotels_payload(1), 1)
        .with_public_endpoint("/seatrips/public", 200, factory::sea_trips_payload(1), 1)
        .with_public_endpoint("/public/safaris", 200, factory::safaris_payload(1), 1)
        .build()
        .await?;

    let resp = app(&test)
        .oneshot(Request::get("/api/trips").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await.as_array().unwrap().len(), 3);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect admin routes to answer 401 JSON to a browser without a session cookie
async fn admin_routes_require_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(Request::get("/api/admin/hotels").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(body_json(resp).await["error"].is_string());

    Ok(())
}

#[tokio::test]
/// Expect a successful login to set the session cookie
async fn login_sets_session_cookie() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(200, json!({ "token": TEST_AUTH_TOKEN }))
        .build()
        .await?;

    let credentials = json!({ "username": TEST_USERNAME, "password": TEST_PASSWORD });
    let request = Request::post("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(credentials.to_string()))
        .unwrap();

    let resp = app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp.headers().get(header::SET_COOKIE).unwrap();
    assert!(cookie.to_str().unwrap().contains("HttpOnly"));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the OpenAPI document to list the admin collection routes
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(
            Request::get("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc = body_json(resp).await;
    assert!(doc["paths"]["/api/admin/{resource}"].is_object());
    assert!(doc["paths"]["/api/admin/{resource}/{id}"].is_object());

    Ok(())
}
