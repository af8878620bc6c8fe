//! Companies Façade
//!
//! Directory listing, detail, moderation updates, and the public company
//! registration submission.

use serde_json::{json, Map, Value};

use super::client::{self, ApiError, Page};
use super::models::{Company, CompanyStatistics, CompanySummary};
use crate::state::filters::FilterQuery;

pub async fn list(query: &FilterQuery) -> Result<Page<CompanySummary>, ApiError> {
    client::get_page(&format!("/companies/?{}", query.to_query_string())).await
}

pub async fn get(slug: &str) -> Result<Company, ApiError> {
    client::get(&format!("/companies/{}/", slug)).await
}

pub async fn create(payload: &Value) -> Result<Company, ApiError> {
    client::post("/companies/", payload).await
}

pub async fn update(slug: &str, payload: &Value) -> Result<Company, ApiError> {
    client::put(&format!("/companies/{}/", slug), payload).await
}

pub async fn delete(slug: &str) -> Result<(), ApiError> {
    client::delete(&format!("/companies/{}/", slug)).await
}

pub async fn statistics() -> Result<CompanyStatistics, ApiError> {
    client::get("/companies/statistics/").await
}

/// Set a company's moderation status (admin console)
pub async fn set_moderation_status(slug: &str, status: &str) -> Result<Company, ApiError> {
    update(slug, &json!({ "moderation_status": status })).await
}

/// Company registration form fields, all kept as entered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyForm {
    pub name: String,
    pub short_description: String,
    pub description: String,
    pub website: String,
    pub founded_date: String,
    pub company_type: String,
    pub status: String,
    pub hq_country: String,
    pub hq_city: String,
    pub hq_address: String,
    pub employee_count_range: String,
    pub total_funding_raised_usd: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub linkedin_url: String,
    pub twitter_url: String,
    pub facebook_url: String,
    pub logo: String,
    pub industries: Vec<u64>,
    pub tags: String,
    pub notes: String,
}

/// Build the registration payload from the form.
///
/// Empty optional fields are dropped entirely (never sent as `""` or `[]`),
/// selected industries become `industry_ids`, tags are normalized to a
/// `"a, b"` string, and funding is parsed to a number. `status` defaults to
/// `"Operating"` and every submission is tagged `company_registration`.
pub fn registration_payload(form: &CompanyForm) -> Value {
    let mut payload = Map::new();

    // Required fields are always sent, even when blank; the server reports
    // the missing ones as field errors.
    payload.insert("name".into(), json!(form.name));
    payload.insert("short_description".into(), json!(form.short_description));
    payload.insert("hq_country".into(), json!(form.hq_country));
    payload.insert("hq_city".into(), json!(form.hq_city));
    payload.insert("contact_email".into(), json!(form.contact_email));

    let optional = [
        ("description", &form.description),
        ("website", &form.website),
        ("founded_date", &form.founded_date),
        ("company_type", &form.company_type),
        ("status", &form.status),
        ("hq_address", &form.hq_address),
        ("employee_count_range", &form.employee_count_range),
        ("contact_phone", &form.contact_phone),
        ("linkedin_url", &form.linkedin_url),
        ("twitter_url", &form.twitter_url),
        ("facebook_url", &form.facebook_url),
        ("logo", &form.logo),
        ("notes", &form.notes),
    ];
    for (key, value) in optional {
        if !value.is_empty() {
            payload.insert(key.into(), json!(value));
        }
    }

    let tags = form
        .tags
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    if !tags.is_empty() {
        payload.insert("tags".into(), json!(tags));
    }

    if !form.industries.is_empty() {
        payload.insert("industry_ids".into(), json!(form.industries));
    }

    if let Ok(funding) = form.total_funding_raised_usd.trim().parse::<f64>() {
        payload.insert("total_funding_raised_usd".into(), json!(funding));
    }

    if !payload.contains_key("status") {
        payload.insert("status".into(), json!("Operating"));
    }
    payload.insert("submission_type".into(), json!("company_registration"));

    Value::Object(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_form() -> CompanyForm {
        CompanyForm {
            name: "Acme".to_string(),
            short_description: "desc".to_string(),
            hq_country: "Ethiopia".to_string(),
            hq_city: "Addis Ababa".to_string(),
            contact_email: "a@b.com".to_string(),
            ..CompanyForm::default()
        }
    }

    #[test]
    fn test_minimal_submission_defaults() {
        let payload = registration_payload(&minimal_form());
        assert_eq!(payload["name"], "Acme");
        assert_eq!(payload["status"], "Operating");
        assert_eq!(payload["submission_type"], "company_registration");
        // Empty-array fields are dropped, not sent as []
        assert!(payload.get("industries").is_none());
        assert!(payload.get("industry_ids").is_none());
        assert!(payload.get("tags").is_none());
        assert!(payload.get("total_funding_raised_usd").is_none());
    }

    #[test]
    fn test_selected_industries_become_industry_ids() {
        let mut form = minimal_form();
        form.industries = vec![3, 7];
        let payload = registration_payload(&form);
        assert_eq!(payload["industry_ids"], serde_json::json!([3, 7]));
    }

    #[test]
    fn test_explicit_status_is_kept() {
        let mut form = minimal_form();
        form.status = "Closed".to_string();
        let payload = registration_payload(&form);
        assert_eq!(payload["status"], "Closed");
    }

    #[test]
    fn test_tags_normalized() {
        let mut form = minimal_form();
        form.tags = " fintech ,, mobile money ,".to_string();
        let payload = registration_payload(&form);
        assert_eq!(payload["tags"], "fintech, mobile money");
    }

    #[test]
    fn test_funding_parsed_or_dropped() {
        let mut form = minimal_form();
        form.total_funding_raised_usd = "1500000".to_string();
        assert_eq!(registration_payload(&form)["total_funding_raised_usd"], 1500000.0);

        form.total_funding_raised_usd = "not a number".to_string();
        assert!(registration_payload(&form)
            .get("total_funding_raised_usd")
            .is_none());
    }
}
