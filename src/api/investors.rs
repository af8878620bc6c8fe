//! Investors Façade

use super::client::{self, ApiError, Page};
use super::models::{CompanySummary, Investor};
use crate::state::filters::FilterQuery;

pub async fn list(query: &FilterQuery) -> Result<Page<Investor>, ApiError> {
    client::get_page(&format!("/investors/?{}", query.to_query_string())).await
}

pub async fn get(slug: &str) -> Result<Investor, ApiError> {
    client::get(&format!("/investors/{}/", slug)).await
}

/// Companies this investor has participated in
pub async fn portfolio(slug: &str) -> Result<Vec<CompanySummary>, ApiError> {
    let page: Page<CompanySummary> =
        client::get_page(&format!("/investors/{}/portfolio/", slug)).await?;
    Ok(page.items)
}
