use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use skyegypt::server::controller::trip::get_trips;

use super::*;

#[tokio::test]
/// Expect hotels, then sea trips, then safaris as uniform trip cards
async fn merges_public_listings() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_public_endpoint("/hotels/public", 200, factory::hotels_payload(2), 1)
        .with_public_endpoint("/seatrips/public", 200, factory::sea_trips_payload(1), 1)
        .with_public_endpoint("/public/safaris", 200, factory::safaris_payload(1), 1)
        .build()
        .await?;

    let result = get_trips(State(app_state(&test))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let trips = body.as_array().unwrap();
    let kinds: Vec<&str> = trips.iter().map(|t| t["type"].as_str().unwrap()).collect();
    assert_eq!(kinds, vec!["hotel", "hotel", "seaTrip", "safariTrip"]);

    for trip in trips {
        let reviews = trip["reviews"].as_u64().unwrap();
        assert!((50..250).contains(&reviews));
    }

    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 502 naming the failing endpoint when one public listing fails
async fn reports_failing_endpoint() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_public_endpoint("/hotels/public", 200, factory::hotels_payload(1), 1)
        .with_public_endpoint("/seatrips/public", 500, json!({}), 1)
        .with_public_endpoint("/public/safaris", 200, factory::safaris_payload(1), 1)
        .build()
        .await?;

    let result = get_trips(State(app_state(&test))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "API Errors: Sea Trips API: 500 Internal Server Error" })
    );

    Ok(())
}
