use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, trip::TripDto},
    server::{error::Error, model::app::AppState, service::trip::TripService},
};

pub static TRIP_TAG: &str = "trips";

/// List hotels, sea trips, and safaris as trip cards
///
/// All three public backend listings must succeed; otherwise the response names every
/// failing endpoint.
#[utoipa::path(
    get,
    path = "/api/trips",
    tag = TRIP_TAG,
    responses(
        (status = 200, description = "Trip cards, hotels first, then sea trips, then safaris", body = Vec<TripDto>),
        (status = 502, description = "One or more public backend listings failed", body = ErrorDto)
    ),
)]
pub async fn get_trips(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let listings = TripService::new(&state.backend).fetch_listings().await?;

    let trips = listings.into_trips(&mut rand::rng());

    Ok(Json(trips))
}
