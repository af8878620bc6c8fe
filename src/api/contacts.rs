//! Contact Messages Façade
//!
//! Public contact form submission and the admin inbox actions.

use serde_json::{json, Map, Value};

use super::client::{self, ApiError, Page};
use super::models::{ActionResponse, ContactMessage};
use crate::state::filters::FilterQuery;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

/// `company` is optional and dropped when blank
pub fn contact_payload(form: &ContactForm) -> Value {
    let mut payload = Map::new();
    payload.insert("name".into(), json!(form.name));
    payload.insert("email".into(), json!(form.email));
    payload.insert("message".into(), json!(form.message));
    if !form.company.is_empty() {
        payload.insert("company".into(), json!(form.company));
    }
    Value::Object(payload)
}

pub async fn submit(form: &ContactForm) -> Result<ContactMessage, ApiError> {
    client::post("/contact/", &contact_payload(form)).await
}

pub async fn list(query: &FilterQuery) -> Result<Page<ContactMessage>, ApiError> {
    client::get_page(&format!("/contacts/?{}", query.to_query_string())).await
}

pub async fn mark_resolved(id: u64) -> Result<ActionResponse, ApiError> {
    client::post_empty(&format!("/contacts/{}/mark_resolved/", id)).await
}

pub async fn add_notes(id: u64, notes: &str) -> Result<ActionResponse, ApiError> {
    client::post(
        &format!("/contacts/{}/add_notes/", id),
        &json!({ "notes": notes }),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_dropped_when_blank() {
        let form = ContactForm {
            name: "Sara".to_string(),
            email: "sara@example.com".to_string(),
            company: String::new(),
            message: "Hello".to_string(),
        };
        let payload = contact_payload(&form);
        assert!(payload.get("company").is_none());
        assert_eq!(payload["message"], "Hello");
    }
}
