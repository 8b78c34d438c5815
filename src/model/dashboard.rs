use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::resource::Resource;

/// Overview of every inventory collection shown on the admin dashboard
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DashboardDto {
    pub tabs: Vec<DashboardTabDto>,
}

/// One collection's record count, inferred columns, and leading rows
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DashboardTabDto {
    pub resource: Resource,
    pub label: String,
    pub total: usize,
    pub columns: Vec<String>,
    #[cfg_attr(feature = "server", schema(value_type = Vec<Object>))]
    pub rows: Vec<Map<String, Value>>,
}
