//! Industries Façade

use super::client::{self, ApiError, Page};
use super::models::{Industry, Sector};

/// All industries, unfiltered, for filter panels and form pickers
pub async fn all() -> Result<Vec<Industry>, ApiError> {
    let page: Page<Industry> = client::get_page("/industries/").await?;
    Ok(page.items)
}

/// Top-level sectors with rolled-up company counts and sub-industries
pub async fn sectors() -> Result<Vec<Sector>, ApiError> {
    let page: Page<Sector> = client::get_page("/industries/sectors/").await?;
    Ok(page.items)
}
