//! Unified card shape for the public trip listing.

use serde::{Deserialize, Serialize};

use crate::{
    model::{hotel::HotelDto, lenient, safari::SafariDto, sea_trip::SeaTripDto},
    pipeline::{
        format::format_time,
        price::{summarize, PriceSummary},
    },
};

/// Which collection a trip card came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum TripKind {
    #[serde(rename = "hotel")]
    Hotel,
    #[serde(rename = "seaTrip")]
    SeaTrip,
    #[serde(rename = "safariTrip")]
    SafariTrip,
}

impl TripKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Hotel => "Hotel",
            Self::SeaTrip => "Sea Trip",
            Self::SafariTrip => "Safari Trip",
        }
    }

    /// Fixed rating shown on every card of this kind
    pub fn rating(self) -> f32 {
        match self {
            Self::Hotel => 4.5,
            Self::SeaTrip => 4.8,
            Self::SafariTrip => 4.7,
        }
    }

    pub fn price_unit(self) -> &'static str {
        match self {
            Self::Hotel => "/ Night",
            Self::SeaTrip | Self::SafariTrip => "/ Person",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Hotel => "badge-info",
            Self::SeaTrip => "badge-success",
            Self::SafariTrip => "badge-warning",
        }
    }
}

/// Type filter offered above the trip grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TripFilter {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "hotels")]
    Hotels,
    #[serde(rename = "seaTrips")]
    SeaTrips,
    #[serde(rename = "safari")]
    Safari,
}

impl TripFilter {
    pub const ALL: [TripFilter; 4] = [
        TripFilter::All,
        TripFilter::Hotels,
        TripFilter::SeaTrips,
        TripFilter::Safari,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Hotels => "Hotels",
            Self::SeaTrips => "Sea Trips",
            Self::Safari => "Safari",
        }
    }

    pub fn matches(self, kind: TripKind) -> bool {
        match self {
            Self::All => true,
            Self::Hotels => kind == TripKind::Hotel,
            Self::SeaTrips => kind == TripKind::SeaTrip,
            Self::Safari => kind == TripKind::SafariTrip,
        }
    }

    /// Keeps the trips of the selected kind in their original order
    pub fn apply(self, trips: &[TripDto]) -> Vec<TripDto> {
        trips
            .iter()
            .filter(|t| self.matches(t.kind))
            .cloned()
            .collect()
    }
}

/// A hotel, sea trip, or safari rendered as a public card
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TripDto {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: TripKind,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub video: Option<String>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub duration: Option<String>,
    pub price: Option<String>,
    pub total_price: Option<String>,
    pub discount: Option<String>,
    pub transportation: Option<String>,
    pub rating: f32,
    pub reviews: u32,
}

fn duration(start: &Option<String>, end: &Option<String>) -> Option<String> {
    match (lenient::non_blank(start), lenient::non_blank(end)) {
        (Some(start), Some(end)) => Some(format!("{} - {}", format_time(start), format_time(end))),
        _ => None,
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TripDto {
    pub fn from_hotel(hotel: HotelDto, reviews: u32) -> Self {
        Self {
            id: hotel.id,
            kind: TripKind::Hotel,
            name: hotel.name,
            description: hotel.description,
            image: present(hotel.image),
            video: present(hotel.video_link),
            location: present(hotel.location),
            city: present(hotel.city),
            duration: None,
            price: present(hotel.price),
            total_price: None,
            discount: None,
            transportation: None,
            rating: TripKind::Hotel.rating(),
            reviews,
        }
    }

    pub fn from_sea_trip(trip: SeaTripDto, reviews: u32) -> Self {
        Self {
            duration: duration(&trip.start_time, &trip.end_time),
            id: trip.id,
            kind: TripKind::SeaTrip,
            name: trip.name,
            description: trip.description,
            image: present(trip.image),
            video: present(trip.video_url),
            location: None,
            city: None,
            price: present(trip.price),
            total_price: present(trip.total_price),
            discount: present(trip.discount),
            transportation: present(trip.transportation),
            rating: TripKind::SeaTrip.rating(),
            reviews,
        }
    }

    pub fn from_safari(safari: SafariDto, reviews: u32) -> Self {
        Self {
            duration: duration(&safari.start_time, &safari.end_time),
            id: safari.id,
            kind: TripKind::SafariTrip,
            name: safari.name,
            description: safari.description,
            image: present(safari.image),
            video: present(safari.video),
            location: None,
            city: None,
            price: present(safari.price),
            total_price: present(safari.total_price),
            discount: present(safari.discount),
            transportation: present(safari.transportation),
            rating: TripKind::SafariTrip.rating(),
            reviews,
        }
    }

    pub fn price_summary(&self) -> PriceSummary {
        summarize(
            self.price.as_deref(),
            self.transportation.as_deref(),
            self.total_price.as_deref(),
        )
    }
}
