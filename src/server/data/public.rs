use serde_json::Value;

use crate::{
    model::resource::Resource,
    pipeline::normalize::{normalize_list, parse_body},
    server::{
        data::BackendClient,
        error::{
            backend::{BackendError, EndpointFailure},
            Error,
        },
    },
};

pub struct PublicRepository<'a> {
    client: &'a BackendClient,
}

impl<'a> PublicRepository<'a> {
    /// Creates a new instance of [`PublicRepository`]
    pub fn new(client: &'a BackendClient) -> Self {
        Self { client }
    }

    /// Fetches a public listing without authentication
    ///
    /// # Returns
    /// - `Ok(Vec<Value>)` - Normalized records
    /// - `Err(BackendError::Aggregate)` - Non-2xx, carrying a single [`EndpointFailure`]
    /// - `Err(BackendError::Request)` - Backend unreachable
    pub async fn list(&self, resource: Resource) -> Result<Vec<Value>, Error> {
        let response = self.client.get(resource.public_path()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(BackendError::Aggregate(vec![EndpointFailure {
                label: resource.public_label(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            }])
            .into());
        }

        let body = response.text().await?;

        Ok(normalize_list(parse_body(&body), resource.envelope_keys()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use skyegypt_test_utils::prelude::*;

    use crate::{
        model::resource::Resource,
        server::{
            data::{public::PublicRepository, BackendClient},
            error::{backend::BackendError, Error},
        },
    };

    #[tokio::test]
    /// Expect safaris to be read from the nested public path
    async fn reads_safaris_from_public_prefix() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_public_endpoint("/public/safaris", 200, factory::safaris_payload(2), 1)
            .build()
            .await?;
        let client = BackendClient::from_base_url(test.url());

        let records = PublicRepository::new(&client)
            .list(Resource::Safaris)
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect a labelled failure naming the status and reason
    async fn reports_failing_endpoint() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_public_endpoint("/seatrips/public", 500, json!({}), 1)
            .build()
            .await?;
        let client = BackendClient::from_base_url(test.url());

        let result = PublicRepository::new(&client).list(Resource::SeaTrips).await;

        let Err(Error::BackendError(err @ BackendError::Aggregate(_))) = result else {
            panic!("expected aggregate failure");
        };
        assert_eq!(
            err.to_string(),
            "API Errors: Sea Trips API: 500 Internal Server Error"
        );

        Ok(())
    }
}
