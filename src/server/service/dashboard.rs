use serde_json::{Map, Value};

use crate::{
    model::{
        dashboard::{DashboardDto, DashboardTabDto},
        resource::Resource,
    },
    pipeline::columns::infer_columns,
    server::{
        data::{inventory::InventoryRepository, BackendClient},
        error::Error,
        model::session::auth::AdminSession,
    },
};

/// Rows previewed per dashboard tab
pub const PREVIEW_ROWS: usize = 5;

/// Dashboard tab order
pub const DASHBOARD_TABS: [Resource; 3] = [Resource::SeaTrips, Resource::Hotels, Resource::Safaris];

/// Builds one tab from a collection's normalized records
pub fn build_tab(resource: Resource, records: Vec<Value>) -> DashboardTabDto {
    let columns = infer_columns(&records);
    let total = records.len();

    let rows: Vec<Map<String, Value>> = records
        .into_iter()
        .filter_map(|record| match record {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .take(PREVIEW_ROWS)
        .collect();

    DashboardTabDto {
        resource,
        label: resource.label().to_string(),
        total,
        columns,
        rows,
    }
}

pub struct DashboardService<'a> {
    client: &'a BackendClient,
}

impl<'a> DashboardService<'a> {
    pub fn new(client: &'a BackendClient) -> Self {
        Self { client }
    }

    /// Lists all three collections concurrently; the first failure fails the dashboard
    pub async fn overview(&self, admin: &AdminSession) -> Result<DashboardDto, Error> {
        let repo = InventoryRepository::new(self.client);
        let [first, second, third] = DASHBOARD_TABS;

        let (first_records, second_records, third_records) = tokio::try_join!(
            repo.list(admin, first),
            repo.list(admin, second),
            repo.list(admin, third),
        )?;

        Ok(DashboardDto {
            tabs: vec![
                build_tab(first, first_records),
                build_tab(second, second_records),
                build_tab(third, third_records),
            ],
        })
    }
}
