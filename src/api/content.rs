//! Curated Content Façade

use std::collections::BTreeMap;

use serde::Deserialize;

use super::client::{self, ApiError, Page};
use super::models::CuratedContent;

pub async fn get(slug: &str) -> Result<CuratedContent, ApiError> {
    client::get(&format!("/curated-content/{}/", slug)).await
}

pub async fn featured() -> Result<Vec<CuratedContent>, ApiError> {
    let page: Page<CuratedContent> = client::get_page("/curated-content/featured/").await?;
    Ok(page.items)
}

/// One named group per content type
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentGroup {
    pub name: String,
    #[serde(default)]
    pub content: Vec<CuratedContent>,
}

/// Content grouped by type, keyed by the type identifier
pub async fn by_type() -> Result<BTreeMap<String, ContentGroup>, ApiError> {
    client::get("/curated-content/by_type/").await
}
