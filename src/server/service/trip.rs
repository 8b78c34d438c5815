use dioxus_logger::tracing;
use rand::Rng;
use serde_json::Value;

use crate::{
    model::{
        hotel::HotelDto, resource::Resource, safari::SafariDto, sea_trip::SeaTripDto,
        trip::TripDto,
    },
    pipeline::normalize::decode_records,
    server::{
        data::{public::PublicRepository, BackendClient},
        error::{
            backend::{BackendError, EndpointFailure},
            Error,
        },
    },
};

/// Review counts are drawn from this range for every card
const REVIEW_RANGE: std::ops::Range<u32> = 50..250;

/// The three public listings, decoded
#[derive(Debug, Default)]
pub struct PublicListings {
    pub hotels: Vec<HotelDto>,
    pub sea_trips: Vec<SeaTripDto>,
    pub safaris: Vec<SafariDto>,
}

impl PublicListings {
    /// Maps every listing into a trip card, hotels first, then sea trips, then safaris
    pub fn into_trips<R: Rng + ?Sized>(self, rng: &mut R) -> Vec<TripDto> {
        let mut trips =
            Vec::with_capacity(self.hotels.len() + self.sea_trips.len() + self.safaris.len());

        trips.extend(
            self.hotels
                .into_iter()
                .map(|hotel| TripDto::from_hotel(hotel, rng.random_range(REVIEW_RANGE))),
        );
        trips.extend(
            self.sea_trips
                .into_iter()
                .map(|trip| TripDto::from_sea_trip(trip, rng.random_range(REVIEW_RANGE))),
        );
        trips.extend(
            self.safaris
                .into_iter()
                .map(|safari| TripDto::from_safari(safari, rng.random_range(REVIEW_RANGE))),
        );

        trips
    }
}

/// Moves a failed endpoint into `failures`, leaving other errors to propagate
fn collect_listing(
    result: Result<Vec<Value>, Error>,
    failures: &mut Vec<EndpointFailure>,
) -> Result<Vec<Value>, Error> {
    match result {
        Ok(records) => Ok(records),
        Err(Error::BackendError(BackendError::Aggregate(failed))) => {
            failures.extend(failed);
            Ok(Vec::new())
        }
        Err(err) => Err(err),
    }
}

pub struct TripService<'a> {
    client: &'a BackendClient,
}

impl<'a> TripService<'a> {
    pub fn new(client: &'a BackendClient) -> Self {
        Self { client }
    }

    /// Fetches the three public listings concurrently and waits for all of them
    ///
    /// # Returns
    /// - `Ok(PublicListings)` - Every endpoint answered 2xx
    /// - `Err(BackendError::Aggregate)` - At least one endpoint failed; every failure is named
    /// - `Err(BackendError::Request)` - Backend unreachable
    pub async fn fetch_listings(&self) -> Result<PublicListings, Error> {
        let repo = PublicRepository::new(self.client);

        let (hotels, sea_trips, safaris) = tokio::join!(
            repo.list(Resource::Hotels),
            repo.list(Resource::SeaTrips),
            repo.list(Resource::Safaris),
        );

        let mut failures = Vec::new();
        let hotels = collect_listing(hotels, &mut failures)?;
        let sea_trips = collect_listing(sea_trips, &mut failures)?;
        let safaris = collect_listing(safaris, &mut failures)?;

        if !failures.is_empty() {
            return Err(BackendError::Aggregate(failures).into());
        }

        tracing::debug!(
            hotels = hotels.len(),
            sea_trips = sea_trips.len(),
            safaris = safaris.len(),
            "Fetched public listings"
        );

        Ok(PublicListings {
            hotels: decode_records(hotels),
            sea_trips: decode_records(sea_trips),
            safaris: decode_records(safaris),
        })
    }
}
