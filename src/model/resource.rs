//! The three inventory collections exposed by the backend.
//!
//! Every path, envelope key, and form field that differs between hotels, sea trips,
//! and safaris is looked up here so the list pipeline and the edit drawer can stay
//! generic over the collection they operate on.

use serde::{Deserialize, Serialize};

/// An inventory collection managed through the backend.
///
/// Serialized using the backend's own path segment (`hotels`, `seatrips`, `safaris`),
/// which is also how the collection appears in application routes such as
/// `/api/admin/{resource}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum Resource {
    #[serde(rename = "hotels")]
    Hotels,
    #[serde(rename = "seatrips")]
    SeaTrips,
    #[serde(rename = "safaris")]
    Safaris,
}

/// How a form field is edited and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    LongText,
    Number,
    Time,
    Url,
}

/// A single editable attribute of an inventory record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Multipart field name sent to the backend
    pub name: &'static str,
    /// Human readable label used in forms and validation messages
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const fn field(name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> FieldSpec {
    FieldSpec {
        name,
        label,
        kind,
        required,
    }
}

const HOTEL_FIELDS: &[FieldSpec] = &[
    field("name", "Name", FieldKind::Text, true),
    field("description", "Description", FieldKind::LongText, true),
    field("price", "Price", FieldKind::Number, false),
    field("location", "Location", FieldKind::Text, false),
    field("city", "City", FieldKind::Text, false),
    field("image", "Image URL", FieldKind::Url, false),
    field("video_link", "Video Link", FieldKind::Url, false),
];

const SEA_TRIP_FIELDS: &[FieldSpec] = &[
    field("name", "Name", FieldKind::Text, true),
    field("description", "Description", FieldKind::LongText, true),
    field("price", "Price", FieldKind::Number, true),
    field("start_time", "Start Time", FieldKind::Time, true),
    field("end_time", "End Time", FieldKind::Time, true),
    field("discount", "Discount", FieldKind::Text, false),
    field("transportation", "Transportation", FieldKind::Number, false),
    field("total_price", "Total Price", FieldKind::Number, false),
    field("image", "Image URL", FieldKind::Url, false),
    field("video_url", "Video URL", FieldKind::Url, false),
];

const SAFARI_FIELDS: &[FieldSpec] = &[
    field("name", "Name", FieldKind::Text, true),
    field("description", "Description", FieldKind::LongText, true),
    field("price", "Price", FieldKind::Number, true),
    field("start_time", "Start Time", FieldKind::Time, true),
    field("end_time", "End Time", FieldKind::Time, true),
    field("transportation", "Transportation", FieldKind::Number, true),
    field("discount", "Discount", FieldKind::Text, false),
    field("total_price", "Total Price", FieldKind::Number, false),
    field("image", "Image URL", FieldKind::Url, false),
    field("video", "Video URL", FieldKind::Url, false),
];

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Hotels, Resource::SeaTrips, Resource::Safaris];

    /// Path segment used by both the backend and the application routes
    pub fn slug(self) -> &'static str {
        match self {
            Self::Hotels => "hotels",
            Self::SeaTrips => "seatrips",
            Self::Safaris => "safaris",
        }
    }

    /// Admin collection path on the backend, e.g. `/seatrips`
    pub fn admin_path(self) -> String {
        format!("/{}", self.slug())
    }

    /// Unauthenticated listing path on the backend.
    ///
    /// The safari endpoint is nested differently from the other two.
    pub fn public_path(self) -> &'static str {
        match self {
            Self::Hotels => "/hotels/public",
            Self::SeaTrips => "/seatrips/public",
            Self::Safaris => "/public/safaris",
        }
    }

    /// Envelope keys tried in order when the payload is not a bare array
    pub fn envelope_keys(self) -> &'static [&'static str] {
        match self {
            Self::Hotels => &["hotels", "items", "data"],
            Self::SeaTrips => &["seatrips", "items", "data"],
            Self::Safaris => &["safaris", "items", "data"],
        }
    }

    /// Plural label shown in the admin console
    pub fn label(self) -> &'static str {
        match self {
            Self::Hotels => "Hotels",
            Self::SeaTrips => "SeaTrips",
            Self::Safaris => "Safaris",
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            Self::Hotels => "Hotel",
            Self::SeaTrips => "SeaTrip",
            Self::Safaris => "Safari",
        }
    }

    /// Lowercase plural used in table footers and empty states
    pub fn noun(self) -> &'static str {
        match self {
            Self::Hotels => "hotels",
            Self::SeaTrips => "sea trips",
            Self::Safaris => "safaris",
        }
    }

    /// Label used when reporting a failed public endpoint
    pub fn public_label(self) -> &'static str {
        match self {
            Self::Hotels => "Hotels",
            Self::SeaTrips => "Sea Trips",
            Self::Safaris => "Safari Trips",
        }
    }

    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::Hotels => HOTEL_FIELDS,
            Self::SeaTrips => SEA_TRIP_FIELDS,
            Self::Safaris => SAFARI_FIELDS,
        }
    }

    pub fn field(self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.name == name)
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.slug() == slug)
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
