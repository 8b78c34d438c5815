use axum::{extract::State, http::StatusCode, response::IntoResponse};
use skyegypt::server::controller::dashboard::get_dashboard;

use super::*;

#[tokio::test]
/// Expect one tab per collection with totals and inferred columns
async fn builds_overview() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_list_endpoint("/seatrips", factory::sea_trips_payload(7), 1)
        .with_list_endpoint("/hotels", factory::hotels_payload(2), 1)
        .with_list_endpoint("/safaris", factory::safaris_payload(0), 1)
        .build()
        .await?;
    log_in(&test).await;

    let result = get_dashboard(State(app_state(&test)), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let tabs = body["tabs"].as_array().unwrap();
    assert_eq!(tabs.len(), 3);

    assert_eq!(tabs[0]["resource"], "seatrips");
    assert_eq!(tabs[0]["total"], 7);
    assert_eq!(tabs[0]["rows"].as_array().unwrap().len(), 5);

    let columns: Vec<&str> = tabs[1]["columns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap())
        .collect();
    assert!(columns.contains(&"name"));
    assert!(!columns.contains(&"_id"));
    assert!(!columns.contains(&"created_at"));

    assert_eq!(tabs[2]["total"], 0);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 401 when nobody is logged in
async fn requires_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_dashboard(State(app_state(&test)), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
