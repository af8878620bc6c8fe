//! People Façade

use super::client::{self, ApiError, Page};
use super::models::Person;
use crate::state::filters::FilterQuery;

pub async fn list(query: &FilterQuery) -> Result<Page<Person>, ApiError> {
    client::get_page(&format!("/people/?{}", query.to_query_string())).await
}
