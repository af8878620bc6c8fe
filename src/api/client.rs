//! HTTP API Client
//!
//! Single chokepoint for all requests to the directory REST API. Attaches the
//! bearer token whenever one is stored, normalizes list responses (paginated
//! envelope or bare array) into [`Page`], and classifies error bodies into
//! [`ApiError`] so pages can pattern-match instead of probing shapes.

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::storage;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Get the API base URL from local storage or use default
pub fn api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("venturescope_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("venturescope_api_url", url);
        }
    }
}

// ============ Error Type ============

/// Classified API failure.
///
/// The server reports errors in several shapes (`{errors: {field: [..]}}`,
/// `{detail}`, `{message}`, plain text); this enum is the single contract the
/// rest of the app sees.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Transport failure or undecodable response
    #[error("network error: {0}")]
    Network(String),
    /// Field-level validation messages, passed through verbatim
    #[error("{}", fields_summary(.fields))]
    Validation {
        status: u16,
        fields: Vec<(String, String)>,
    },
    /// A single human-readable message
    #[error("{text}")]
    Message { status: u16, text: String },
}

fn fields_summary(fields: &[(String, String)]) -> String {
    fields
        .iter()
        .map(|(name, msg)| format!("{}: {}", name, msg))
        .collect::<Vec<_>>()
        .join(" | ")
}

impl ApiError {
    /// First validation message for a field, for inline form rendering
    pub fn field(&self, name: &str) -> Option<&str> {
        match self {
            ApiError::Validation { fields, .. } => fields
                .iter()
                .find(|(field, _)| field == name)
                .map(|(_, msg)| msg.as_str()),
            _ => None,
        }
    }

    /// HTTP status, if the failure came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Network(_) => None,
            ApiError::Validation { status, .. } | ApiError::Message { status, .. } => {
                Some(*status)
            }
        }
    }
}

/// Classify a non-2xx response body into an [`ApiError`]
fn classify(status: u16, body: Value) -> ApiError {
    if let Some(map) = body.as_object() {
        if let Some(errors) = map.get("errors").and_then(Value::as_object) {
            let fields = errors
                .iter()
                .map(|(field, messages)| {
                    let msg = match messages {
                        Value::Array(items) => items
                            .first()
                            .and_then(Value::as_str)
                            .unwrap_or_default()
                            .to_string(),
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    (field.clone(), msg)
                })
                .collect();
            return ApiError::Validation { status, fields };
        }
        if let Some(detail) = map.get("detail").and_then(Value::as_str) {
            return ApiError::Message {
                status,
                text: detail.to_string(),
            };
        }
        if let Some(message) = map.get("message").and_then(Value::as_str) {
            return ApiError::Message {
                status,
                text: message.to_string(),
            };
        }
    }
    if let Some(text) = body.as_str() {
        if !text.is_empty() {
            return ApiError::Message {
                status,
                text: text.to_string(),
            };
        }
    }
    ApiError::Message {
        status,
        text: format!("HTTP {}", status),
    }
}

// ============ List Normalization ============

/// Normalized list response.
///
/// The API returns collections either as a DRF page envelope
/// (`{count, next, previous, results}`) or as a bare array depending on the
/// endpoint. Both shapes normalize here so façades and pages share one
/// contract.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub items: Vec<T>,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ListEnvelope<T> {
    Paginated {
        count: u64,
        #[serde(default)]
        next: Option<String>,
        #[serde(default)]
        previous: Option<String>,
        results: Vec<T>,
    },
    Bare(Vec<T>),
}

impl<T> From<ListEnvelope<T>> for Page<T> {
    fn from(envelope: ListEnvelope<T>) -> Self {
        match envelope {
            ListEnvelope::Paginated {
                count,
                next,
                previous,
                results,
            } => Page {
                count,
                next,
                previous,
                items: results,
            },
            ListEnvelope::Bare(items) => Page {
                count: items.len() as u64,
                next: None,
                previous: None,
                items,
            },
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Page {
            count: 0,
            next: None,
            previous: None,
            items: Vec::new(),
        }
    }
}

impl<T> Page<T> {
    /// Number of pages at the given page size (at least 1)
    pub fn total_pages(&self, page_size: u64) -> u64 {
        (self.count.max(1) + page_size - 1) / page_size
    }
}

// ============ Request Dispatch ============

fn url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Attach the bearer token (when present) and perform the request.
///
/// `204` yields `Value::Null`. Other responses are parsed as JSON when the
/// declared content type says so, otherwise returned as a text value. Non-2xx
/// statuses become classified errors.
async fn send(builder: RequestBuilder, body: Option<&Value>) -> Result<Value, ApiError> {
    let builder = match storage::access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    };

    let request = match body {
        Some(json) => builder
            .json(json)
            .map_err(|e| ApiError::Network(format!("request build error: {}", e)))?,
        None => builder
            .build()
            .map_err(|e| ApiError::Network(format!("request build error: {}", e)))?,
    };

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let body = if status == 204 {
        Value::Null
    } else {
        let is_json = response
            .headers()
            .get("content-type")
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false);
        if is_json {
            response
                .json::<Value>()
                .await
                .map_err(|e| ApiError::Network(format!("parse error: {}", e)))?
        } else {
            Value::String(
                response
                    .text()
                    .await
                    .map_err(|e| ApiError::Network(format!("parse error: {}", e)))?,
            )
        }
    };

    if !response.ok() {
        return Err(classify(status, body));
    }
    Ok(body)
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value)
        .map_err(|e| ApiError::Network(format!("unexpected response shape: {}", e)))
}

/// GET a single typed resource
pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    decode(send(Request::get(&url(path)), None).await?)
}

/// GET a collection, normalizing either response shape into a [`Page`]
pub async fn get_page<T: DeserializeOwned>(path: &str) -> Result<Page<T>, ApiError> {
    let envelope: ListEnvelope<T> = decode(send(Request::get(&url(path)), None).await?)?;
    Ok(envelope.into())
}

/// POST a JSON body
pub async fn post<T: DeserializeOwned>(path: &str, body: &Value) -> Result<T, ApiError> {
    decode(send(Request::post(&url(path)), Some(body)).await?)
}

/// POST with no body (entity action endpoints)
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    decode(send(Request::post(&url(path)), None).await?)
}

/// PUT a JSON body
pub async fn put<T: DeserializeOwned>(path: &str, body: &Value) -> Result<T, ApiError> {
    decode(send(Request::put(&url(path)), Some(body)).await?)
}

/// DELETE a resource
pub async fn delete(path: &str) -> Result<(), ApiError> {
    send(Request::delete(&url(path)), None).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paginated_envelope_normalizes() {
        let value = json!({
            "count": 42,
            "next": "http://localhost:8000/api/companies/?page=2",
            "previous": null,
            "results": [{"id": 1}, {"id": 2}]
        });
        let envelope: ListEnvelope<Value> = serde_json::from_value(value).unwrap();
        let page: Page<Value> = envelope.into();
        assert_eq!(page.count, 42);
        assert!(page.next.is_some());
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn test_bare_array_normalizes_to_same_shape() {
        let value = json!([{"id": 1}, {"id": 2}]);
        let envelope: ListEnvelope<Value> = serde_json::from_value(value).unwrap();
        let page: Page<Value> = envelope.into();
        assert_eq!(page.count, 2);
        assert_eq!(page.next, None);
        assert_eq!(page.items, vec![json!({"id": 1}), json!({"id": 2})]);
    }

    #[test]
    fn test_both_shapes_yield_identical_items() {
        let rows = json!([{"id": 7, "name": "Acme"}]);
        let bare: Page<Value> =
            serde_json::from_value::<ListEnvelope<Value>>(rows.clone())
                .unwrap()
                .into();
        let paginated: Page<Value> = serde_json::from_value::<ListEnvelope<Value>>(json!({
            "count": 1,
            "results": rows
        }))
        .unwrap()
        .into();
        assert_eq!(bare.items, paginated.items);
    }

    #[test]
    fn test_total_pages() {
        let page = Page::<Value> {
            count: 41,
            next: None,
            previous: None,
            items: Vec::new(),
        };
        assert_eq!(page.total_pages(20), 3);
        let empty = Page::<Value> {
            count: 0,
            next: None,
            previous: None,
            items: Vec::new(),
        };
        assert_eq!(empty.total_pages(20), 1);
    }

    #[test]
    fn test_classify_field_errors_pass_through_verbatim() {
        let err = classify(400, json!({"errors": {"email": ["already registered"]}}));
        assert_eq!(err.field("email"), Some("already registered"));
        assert_eq!(err.field("name"), None);
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_classify_field_error_plain_string() {
        let err = classify(400, json!({"errors": {"name": "required"}}));
        assert_eq!(err.field("name"), Some("required"));
    }

    #[test]
    fn test_classify_detail_and_message() {
        let detail = classify(404, json!({"detail": "Not found."}));
        assert_eq!(detail.to_string(), "Not found.");

        let message = classify(500, json!({"message": "server exploded"}));
        assert_eq!(message.to_string(), "server exploded");
    }

    #[test]
    fn test_classify_text_body_and_fallback() {
        let text = classify(502, json!("Bad Gateway"));
        assert_eq!(text.to_string(), "Bad Gateway");

        let fallback = classify(500, Value::Null);
        assert_eq!(fallback.to_string(), "HTTP 500");
    }

    #[test]
    fn test_validation_display_joins_fields() {
        let err = ApiError::Validation {
            status: 400,
            fields: vec![
                ("email".to_string(), "already registered".to_string()),
                ("name".to_string(), "required".to_string()),
            ],
        };
        assert_eq!(err.to_string(), "email: already registered | name: required");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn api_base_override_round_trips_and_trims() {
        set_api_base("http://api.example.test/v1/");
        assert_eq!(api_base(), "http://api.example.test/v1");

        web_sys::window()
            .unwrap()
            .local_storage()
            .unwrap()
            .unwrap()
            .remove_item("venturescope_api_url")
            .unwrap();
        assert_eq!(api_base(), DEFAULT_API_BASE);
    }
}
