use serde::{Deserialize, Serialize};

use crate::{
    model::{
        inventory::{InventoryRecord, RecordFormDto},
        lenient,
        resource::Resource,
    },
    pipeline::search::Searchable,
};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct HotelDto {
    #[serde(default, alias = "_id", deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub price: Option<String>,
    /// Free-text address or a maps URL
    #[serde(default, deserialize_with = "lenient::text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub city: Option<String>,
    #[serde(default, alias = "image_url", deserialize_with = "lenient::text")]
    pub image: Option<String>,
    #[serde(default, alias = "video", deserialize_with = "lenient::text")]
    pub video_link: Option<String>,
}

impl Searchable for HotelDto {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl InventoryRecord for HotelDto {
    const RESOURCE: Resource = Resource::Hotels;

    fn id(&self) -> Option<&str> {
        lenient::non_blank(&self.id)
    }

    fn to_form(&self) -> RecordFormDto {
        RecordFormDto::empty(Self::RESOURCE)
            .with("name", Some(&self.name))
            .with("description", Some(&self.description))
            .with("price", self.price.as_deref())
            .with("location", self.location.as_deref())
            .with("city", self.city.as_deref())
            .with("image", self.image.as_deref())
            .with("video_link", self.video_link.as_deref())
    }
}
