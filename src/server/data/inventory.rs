use reqwest::multipart::Form;
use serde_json::Value;

use crate::{
    model::{inventory::RecordFormDto, resource::Resource},
    pipeline::normalize::{normalize_list, parse_body},
    server::{
        data::{client::ensure_success, BackendClient},
        error::Error,
        model::session::auth::AdminSession,
    },
};

/// Backend path a save targets: the collection to create, the record to update
pub fn record_path(resource: Resource, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("{}/{}", resource.admin_path(), id),
        None => resource.admin_path(),
    }
}

pub struct InventoryRepository<'a> {
    client: &'a BackendClient,
}

impl<'a> InventoryRepository<'a> {
    /// Creates a new instance of [`InventoryRepository`]
    pub fn new(client: &'a BackendClient) -> Self {
        Self { client }
    }

    /// Lists every record of a collection, normalized to a flat array
    ///
    /// Unrecognized envelopes and non-JSON bodies yield an empty list.
    pub async fn list(&self, admin: &AdminSession, resource: Resource) -> Result<Vec<Value>, Error> {
        let request = self.client.get(&resource.admin_path());
        let response = BackendClient::authorized(request, admin).send().await?;
        let response = ensure_success(response).await?;

        let body = response.text().await?;

        Ok(normalize_list(parse_body(&body), resource.envelope_keys()))
    }

    /// Creates (`id` is `None`) or updates a record with a multipart POST
    ///
    /// Every form field is sent, including empty ones, so clearing a field on update
    /// reaches the backend.
    ///
    /// # Returns
    /// - `Ok(Value)` - Parsed response body, `Null` when it was not JSON
    /// - `Err(Error::AuthError)` - Token rejected with 401 or 419
    /// - `Err(Error::BackendError)` - Unreachable or non-2xx, body kept verbatim
    pub async fn save(
        &self,
        admin: &AdminSession,
        resource: Resource,
        id: Option<&str>,
        form: &RecordFormDto,
    ) -> Result<Value, Error> {
        let multipart = form
            .fields
            .iter()
            .fold(Form::new(), |acc, (name, value)| {
                acc.text(name.clone(), value.clone())
            });

        let request = self
            .client
            .post(&record_path(resource, id))
            .multipart(multipart);
        let response = BackendClient::authorized(request, admin).send().await?;
        let response = ensure_success(response).await?;

        let body = response.text().await?;

        Ok(parse_body(&body))
    }

    pub async fn delete(&self, admin: &AdminSession, resource: Resource, id: &str) -> Result<(), Error> {
        let request = self.client.delete(&record_path(resource, Some(id)));
        let response = BackendClient::authorized(request, admin).send().await?;
        ensure_success(response).await?;

        Ok(())
    }
}
