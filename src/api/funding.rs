//! Funding Rounds Façade

use super::client::{self, ApiError, Page};
use super::models::FundingRound;
use crate::state::filters::FilterQuery;

pub async fn list(query: &FilterQuery) -> Result<Page<FundingRound>, ApiError> {
    client::get_page(&format!("/funding-rounds/?{}", query.to_query_string())).await
}

/// Latest announced rounds (bare array endpoint)
pub async fn recent() -> Result<Vec<FundingRound>, ApiError> {
    let page: Page<FundingRound> = client::get_page("/funding-rounds/recent/").await?;
    Ok(page.items)
}
