//! Filter / Search State
//!
//! Per-page list state: free-text search, page number, and insertion-ordered
//! categorical filter groups. Serializes to and parses from the URL query
//! string; pages push state into the URL only on an explicit Apply/Search,
//! and re-fetch when the URL's query string changes.

/// Page size mirrored from the server's pagination default
pub const PAGE_SIZE: u64 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct FilterQuery {
    pub search: String,
    pub page: u64,
    groups: Vec<(String, Vec<String>)>,
}

impl Default for FilterQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            groups: Vec::new(),
        }
    }
}

impl FilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_string();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u64) {
        self.page = page.max(1);
    }

    /// Toggle a value within a filter group; groups keep insertion order
    pub fn toggle(&mut self, key: &str, value: &str) {
        self.page = 1;
        if let Some((_, values)) = self.groups.iter_mut().find(|(k, _)| k == key) {
            if let Some(idx) = values.iter().position(|v| v == value) {
                values.remove(idx);
            } else {
                values.push(value.to_string());
            }
        } else {
            self.groups
                .push((key.to_string(), vec![value.to_string()]));
        }
        self.groups.retain(|(_, values)| !values.is_empty());
    }

    pub fn is_selected(&self, key: &str, value: &str) -> bool {
        self.groups
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.iter().any(|v| v == value))
            .unwrap_or(false)
    }

    pub fn selected(&self, key: &str) -> Vec<String> {
        self.groups
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.clone())
            .unwrap_or_default()
    }

    /// Number of selected filter values across all groups
    pub fn active_count(&self) -> usize {
        self.groups.iter().map(|(_, values)| values.len()).sum()
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.page = 1;
        self.groups.clear();
    }

    /// Serialize for the URL and the API.
    ///
    /// Empty search and `page=1` are omitted; group values are comma-joined
    /// with each value percent-encoded; group order is stable per insertion.
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        if !self.search.is_empty() {
            parts.push(format!("search={}", urlencoding::encode(&self.search)));
        }
        for (key, values) in &self.groups {
            if values.is_empty() {
                continue;
            }
            let joined = values
                .iter()
                .map(|v| urlencoding::encode(v).into_owned())
                .collect::<Vec<_>>()
                .join(",");
            parts.push(format!("{}={}", key, joined));
        }
        if self.page > 1 {
            parts.push(format!("page={}", self.page));
        }
        parts.join("&")
    }

    /// Rebuild filter state from a URL query string (round-trips with
    /// [`Self::to_query_string`])
    pub fn parse(query: &str) -> Self {
        let mut result = Self::new();
        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, raw)) = pair.split_once('=') else {
                continue;
            };
            let Ok(decoded_key) = urlencoding::decode(key) else {
                continue;
            };
            match decoded_key.as_ref() {
                "search" => {
                    if let Ok(value) = urlencoding::decode(raw) {
                        result.search = value.into_owned();
                    }
                }
                "page" => {
                    if let Ok(page) = raw.parse::<u64>() {
                        result.page = page.max(1);
                    }
                }
                key => {
                    let values: Vec<String> = raw
                        .split(',')
                        .filter(|v| !v.is_empty())
                        .filter_map(|v| urlencoding::decode(v).ok())
                        .map(|v| v.into_owned())
                        .collect();
                    if !values.is_empty() {
                        result.groups.push((key.to_string(), values));
                    }
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_insertion_order() {
        let mut query = FilterQuery::new();
        query.toggle("industries", "3");
        query.toggle("status", "Operating");
        assert_eq!(query.to_query_string(), "industries=3&status=Operating");
    }

    #[test]
    fn test_round_trip() {
        let mut query = FilterQuery::new();
        query.set_search("fintech");
        query.toggle("industries", "3");
        query.toggle("industries", "7");
        query.toggle("status", "Operating");
        query.set_page(2);

        let parsed = FilterQuery::parse(&query.to_query_string());
        assert_eq!(parsed, query);
    }

    #[test]
    fn test_toggle_removes_and_drops_empty_group() {
        let mut query = FilterQuery::new();
        query.toggle("industries", "3");
        assert!(query.is_selected("industries", "3"));
        assert_eq!(query.active_count(), 1);

        query.toggle("industries", "3");
        assert!(!query.is_selected("industries", "3"));
        assert_eq!(query.active_count(), 0);
        assert_eq!(query.to_query_string(), "");
    }

    #[test]
    fn test_page_one_and_empty_search_omitted() {
        let mut query = FilterQuery::new();
        query.set_page(1);
        assert_eq!(query.to_query_string(), "");

        query.set_page(3);
        assert_eq!(query.to_query_string(), "page=3");
    }

    #[test]
    fn test_search_is_percent_encoded() {
        let mut query = FilterQuery::new();
        query.set_search("mobile money");
        assert_eq!(query.to_query_string(), "search=mobile%20money");
        assert_eq!(
            FilterQuery::parse("search=mobile%20money").search,
            "mobile money"
        );
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut query = FilterQuery::new();
        query.set_page(4);
        query.toggle("status", "Operating");
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_parse_ignores_malformed_pairs() {
        let parsed = FilterQuery::parse("?search=foo&&bad&industries=3");
        assert_eq!(parsed.search, "foo");
        assert!(parsed.is_selected("industries", "3"));
    }
}
