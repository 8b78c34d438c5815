use serde::{Deserialize, Serialize};

use crate::{
    model::{
        inventory::{InventoryRecord, RecordFormDto},
        lenient,
        resource::Resource,
    },
    pipeline::{format::format_time, search::Searchable},
};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SafariDto {
    #[serde(default, alias = "_id", deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub end_time: Option<String>,
    /// Price add-on for pickup, not a flag
    #[serde(default, deserialize_with = "lenient::text")]
    pub transportation: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub discount: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub total_price: Option<String>,
    #[serde(default, alias = "image_url", deserialize_with = "lenient::text")]
    pub image: Option<String>,
    #[serde(default, alias = "video_url", deserialize_with = "lenient::text")]
    pub video: Option<String>,
}

impl Searchable for SafariDto {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl InventoryRecord for SafariDto {
    const RESOURCE: Resource = Resource::Safaris;

    fn id(&self) -> Option<&str> {
        lenient::non_blank(&self.id)
    }

    fn to_form(&self) -> RecordFormDto {
        let start_time = self.start_time.as_deref().map(format_time);
        let end_time = self.end_time.as_deref().map(format_time);

        RecordFormDto::empty(Self::RESOURCE)
            .with("name", Some(&self.name))
            .with("description", Some(&self.description))
            .with("price", self.price.as_deref())
            .with("start_time", start_time.as_deref())
            .with("end_time", end_time.as_deref())
            .with("transportation", self.transportation.as_deref())
            .with("discount", self.discount.as_deref())
            .with("total_price", self.total_price.as_deref())
            .with("image", self.image.as_deref())
            .with("video", self.video.as_deref())
    }
}
