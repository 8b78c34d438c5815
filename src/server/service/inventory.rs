use dioxus_logger::tracing;
use serde_json::Value;

use crate::{
    model::{
        inventory::{RecordFormDto, RecordListDto},
        resource::{FieldKind, Resource},
    },
    server::{
        data::{inventory::InventoryRepository, BackendClient},
        error::{validation::ValidationError, Error},
        model::session::auth::AdminSession,
    },
};

/// Checks a submission against the resource's field table.
///
/// Returns a form holding every field of the resource, with fields the client omitted
/// sent as empty strings.
pub fn validate_form(
    resource: Resource,
    submitted: &RecordFormDto,
) -> Result<RecordFormDto, ValidationError> {
    if let Some(unknown) = submitted
        .fields
        .keys()
        .find(|name| resource.field(name).is_none())
    {
        return Err(ValidationError::UnknownField(unknown.clone()));
    }

    let mut form = RecordFormDto::empty(resource);

    for spec in resource.fields() {
        let value = submitted.get(spec.name);
        let trimmed = value.trim();

        if spec.required && trimmed.is_empty() {
            return Err(ValidationError::MissingField(spec.label));
        }

        if spec.kind == FieldKind::Number && !trimmed.is_empty() && trimmed.parse::<f64>().is_err() {
            return Err(ValidationError::NotNumeric(spec.label));
        }

        form.set(spec.name, value);
    }

    Ok(form)
}

/// Rejects ids that would escape the record path on the backend.
///
/// Dot segments are resolved by the URL parser and `%` would smuggle encoded separators.
pub fn validate_id(id: &str) -> Result<&str, ValidationError> {
    let trimmed = id.trim();

    if trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || id.contains(['/', '\\', '?', '#', '%'])
    {
        return Err(ValidationError::InvalidId(id.to_string()));
    }

    Ok(id)
}

pub struct InventoryService<'a> {
    client: &'a BackendClient,
}

impl<'a> InventoryService<'a> {
    pub fn new(client: &'a BackendClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, admin: &AdminSession, resource: Resource) -> Result<RecordListDto, Error> {
        let records = InventoryRepository::new(self.client)
            .list(admin, resource)
            .await?;

        tracing::debug!(resource = %resource, count = records.len(), "Listed records");

        Ok(RecordListDto { resource, records })
    }

    /// Validates and saves a record
    ///
    /// A `None` id creates the record; `Some(id)` updates it. Nothing is sent to the
    /// backend when validation fails.
    pub async fn save(
        &self,
        admin: &AdminSession,
        resource: Resource,
        id: Option<&str>,
        submitted: &RecordFormDto,
    ) -> Result<Value, Error> {
        let id = id.map(validate_id).transpose()?;
        let form = validate_form(resource, submitted)?;

        let saved = InventoryRepository::new(self.client)
            .save(admin, resource, id, &form)
            .await?;

        tracing::info!(resource = %resource, id = ?id, "Saved record");

        Ok(saved)
    }

    pub async fn delete(&self, admin: &AdminSession, resource: Resource, id: &str) -> Result<(), Error> {
        let id = validate_id(id)?;

        InventoryRepository::new(self.client)
            .delete(admin, resource, id)
            .await?;

        tracing::info!(resource = %resource, id = %id, "Deleted record");

        Ok(())
    }
}
