use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::{model::resource::Resource, pipeline::search::Searchable};

/// Field values of a create or update submission, keyed by multipart field name.
///
/// The record id is never part of the form; it travels in the request path.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RecordFormDto {
    pub fields: BTreeMap<String, String>,
}

impl RecordFormDto {
    /// A blank form containing every field of the resource
    pub fn empty(resource: Resource) -> Self {
        let fields = resource
            .fields()
            .iter()
            .map(|f| (f.name.to_string(), String::new()))
            .collect();

        Self { fields }
    }

    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_string(), value.into());
    }

    /// Builder-style setter that stores missing values as empty strings
    pub fn with(mut self, name: &str, value: Option<&str>) -> Self {
        self.set(name, value.unwrap_or_default());
        self
    }
}

/// A normalized listing of one collection, exactly as the backend described each record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RecordListDto {
    pub resource: Resource,
    #[cfg_attr(feature = "server", schema(value_type = Vec<Object>))]
    pub records: Vec<Value>,
}

/// A typed record of one of the inventory collections.
pub trait InventoryRecord: Searchable + DeserializeOwned + Clone + PartialEq + 'static {
    const RESOURCE: Resource;

    /// Backend identifier; `None` for records that have not been created yet
    fn id(&self) -> Option<&str>;

    /// Prefilled form used when editing this record
    fn to_form(&self) -> RecordFormDto;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_contains_every_field() {
        let form = RecordFormDto::empty(Resource::Safaris);

        assert_eq!(form.fields.len(), Resource::Safaris.fields().len());
        assert!(form.fields.values().all(String::is_empty));
        assert_eq!(form.get("transportation"), "");
    }

    #[test]
    fn get_returns_empty_for_unknown_field() {
        let form = RecordFormDto::default().with("name", Some("Nile Palace"));

        assert_eq!(form.get("name"), "Nile Palace");
        assert_eq!(form.get("city"), "");
    }
}
