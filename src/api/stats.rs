//! Aggregate Stats Façade

use super::client::{self, ApiError};
use super::models::{DashboardStats, EcosystemOverview};

pub async fn dashboard() -> Result<DashboardStats, ApiError> {
    client::get("/dashboard/").await
}

pub async fn ecosystem() -> Result<EcosystemOverview, ApiError> {
    client::get("/ecosystem/").await
}
