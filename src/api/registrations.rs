//! Organization Registrations Façade
//!
//! Public signup (the three-step questionnaire) and the admin moderation
//! verbs over submitted registrations.

use serde_json::{json, Map, Value};

use super::client::{self, ApiError, Page};
use super::models::{ActionResponse, OrganizationRegistration};
use crate::state::filters::FilterQuery;

/// Organization signup questionnaire fields
#[derive(Debug, Clone, PartialEq)]
pub struct OrganizationForm {
    // Organization details (step 1)
    pub organization_type: String,
    pub organization_name: String,
    pub website: String,
    pub description: String,
    pub founded_year: String,
    pub employee_count: String,
    pub headquarters: String,
    pub country: String,
    // Contact information (step 2)
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub linkedin_profile: String,
    // Additional information (step 3)
    pub sectors: Vec<String>,
    pub funding_stage: String,
    pub total_funding: String,
    pub key_achievements: String,
    pub agree_to_terms: bool,
    pub subscribe_newsletter: bool,
}

impl Default for OrganizationForm {
    fn default() -> Self {
        Self {
            organization_type: String::new(),
            organization_name: String::new(),
            website: String::new(),
            description: String::new(),
            founded_year: String::new(),
            employee_count: String::new(),
            headquarters: String::new(),
            country: "Ethiopia".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            position: String::new(),
            linkedin_profile: String::new(),
            sectors: Vec::new(),
            funding_stage: String::new(),
            total_funding: String::new(),
            key_achievements: String::new(),
            agree_to_terms: false,
            subscribe_newsletter: true,
        }
    }
}

fn empty_to_null(value: &str) -> Value {
    if value.trim().is_empty() {
        Value::Null
    } else {
        json!(value)
    }
}

/// Build the signup payload.
///
/// Empty optional strings are sent as `null` (not dropped), `sectors` is
/// always an array, year and funding parse to numbers, and the newsletter
/// preference is always included.
pub fn signup_payload(form: &OrganizationForm) -> Value {
    let mut payload = Map::new();

    payload.insert("organization_type".into(), json!(form.organization_type));
    payload.insert("organization_name".into(), json!(form.organization_name));
    payload.insert("website".into(), empty_to_null(&form.website));
    payload.insert("description".into(), json!(form.description));
    payload.insert(
        "founded_year".into(),
        form.founded_year
            .trim()
            .parse::<i64>()
            .map(|y| json!(y))
            .unwrap_or(Value::Null),
    );
    payload.insert("employee_count".into(), empty_to_null(&form.employee_count));
    payload.insert("headquarters".into(), json!(form.headquarters));
    payload.insert("country".into(), json!(form.country));

    payload.insert("first_name".into(), json!(form.first_name));
    payload.insert("last_name".into(), json!(form.last_name));
    payload.insert("email".into(), json!(form.email));
    payload.insert("phone".into(), empty_to_null(&form.phone));
    payload.insert("position".into(), json!(form.position));
    payload.insert(
        "linkedin_profile".into(),
        empty_to_null(&form.linkedin_profile),
    );

    payload.insert("sectors".into(), json!(form.sectors));
    payload.insert("funding_stage".into(), empty_to_null(&form.funding_stage));
    payload.insert(
        "total_funding".into(),
        form.total_funding
            .trim()
            .parse::<f64>()
            .map(|f| json!(f))
            .unwrap_or(Value::Null),
    );
    payload.insert(
        "key_achievements".into(),
        empty_to_null(&form.key_achievements),
    );
    payload.insert(
        "subscribe_newsletter".into(),
        json!(form.subscribe_newsletter),
    );

    Value::Object(payload)
}

/// Per-step required-field validation for the signup wizard.
///
/// Returns `(field, message)` pairs; an empty result means the step passes.
pub fn validate_step(form: &OrganizationForm, step: u8) -> Vec<(String, String)> {
    let mut errors = Vec::new();
    let mut require = |field: &str, value: &str, message: &str| {
        if value.trim().is_empty() {
            errors.push((field.to_string(), message.to_string()));
        }
    };

    match step {
        1 => {
            require(
                "organization_type",
                &form.organization_type,
                "Please select organization type",
            );
            require(
                "organization_name",
                &form.organization_name,
                "Organization name is required",
            );
            require("description", &form.description, "Description is required");
            require(
                "headquarters",
                &form.headquarters,
                "Headquarters location is required",
            );
        }
        2 => {
            require("first_name", &form.first_name, "First name is required");
            require("last_name", &form.last_name, "Last name is required");
            require("email", &form.email, "Email is required");
            require("position", &form.position, "Position is required");
            if !form.email.trim().is_empty() && !looks_like_email(&form.email) {
                errors.push((
                    "email".to_string(),
                    "Please enter a valid email address".to_string(),
                ));
            }
        }
        3 => {
            if !form.agree_to_terms {
                errors.push((
                    "agree_to_terms".to_string(),
                    "You must agree to the terms and conditions".to_string(),
                ));
            }
        }
        _ => {}
    }
    errors
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

pub async fn signup(form: &OrganizationForm) -> Result<OrganizationRegistration, ApiError> {
    client::post("/organization-signup/", &signup_payload(form)).await
}

pub async fn list(query: &FilterQuery) -> Result<Page<OrganizationRegistration>, ApiError> {
    client::get_page(&format!(
        "/organization-registrations/?{}",
        query.to_query_string()
    ))
    .await
}

pub async fn approve(id: u64) -> Result<ActionResponse, ApiError> {
    client::post_empty(&format!("/organization-registrations/{}/approve/", id)).await
}

pub async fn reject(id: u64, reason: &str) -> Result<ActionResponse, ApiError> {
    client::post(
        &format!("/organization-registrations/{}/reject/", id),
        &json!({ "reason": reason }),
    )
    .await
}

pub async fn request_info(id: u64, message: &str) -> Result<ActionResponse, ApiError> {
    client::post(
        &format!("/organization-registrations/{}/request_info/", id),
        &json!({ "message": message }),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> OrganizationForm {
        OrganizationForm {
            organization_type: "hub".to_string(),
            organization_name: "iceaddis".to_string(),
            description: "Innovation hub".to_string(),
            headquarters: "Addis Ababa".to_string(),
            first_name: "Abel".to_string(),
            last_name: "Tesfaye".to_string(),
            email: "abel@example.com".to_string(),
            position: "Director".to_string(),
            agree_to_terms: true,
            ..OrganizationForm::default()
        }
    }

    #[test]
    fn test_empty_strings_become_null() {
        let payload = signup_payload(&filled_form());
        assert_eq!(payload["website"], Value::Null);
        assert_eq!(payload["phone"], Value::Null);
        assert_eq!(payload["funding_stage"], Value::Null);
        // Required strings pass through as-is
        assert_eq!(payload["organization_name"], "iceaddis");
        assert_eq!(payload["country"], "Ethiopia");
    }

    #[test]
    fn test_sectors_always_an_array() {
        let payload = signup_payload(&filled_form());
        assert_eq!(payload["sectors"], json!([]));

        let mut form = filled_form();
        form.sectors = vec!["Fintech".to_string()];
        assert_eq!(signup_payload(&form)["sectors"], json!(["Fintech"]));
    }

    #[test]
    fn test_numeric_fields_parse_or_null() {
        let mut form = filled_form();
        form.founded_year = "2015".to_string();
        form.total_funding = "250000.5".to_string();
        let payload = signup_payload(&form);
        assert_eq!(payload["founded_year"], 2015);
        assert_eq!(payload["total_funding"], 250000.5);

        form.founded_year = "soon".to_string();
        assert_eq!(signup_payload(&form)["founded_year"], Value::Null);
    }

    #[test]
    fn test_newsletter_preference_always_sent() {
        let mut form = filled_form();
        assert_eq!(signup_payload(&form)["subscribe_newsletter"], true);
        form.subscribe_newsletter = false;
        assert_eq!(signup_payload(&form)["subscribe_newsletter"], false);
    }

    #[test]
    fn test_step_one_requires_org_details() {
        let form = OrganizationForm::default();
        let errors = validate_step(&form, 1);
        let fields: Vec<&str> = errors.iter().map(|(f, _)| f.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "organization_type",
                "organization_name",
                "description",
                "headquarters"
            ]
        );
        assert!(validate_step(&filled_form(), 1).is_empty());
    }

    #[test]
    fn test_step_two_checks_email_format() {
        let mut form = filled_form();
        form.email = "not-an-email".to_string();
        let errors = validate_step(&form, 2);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, "email");
        assert_eq!(errors[0].1, "Please enter a valid email address");
    }

    #[test]
    fn test_step_three_requires_terms() {
        let mut form = filled_form();
        form.agree_to_terms = false;
        let errors = validate_step(&form, 3);
        assert_eq!(errors[0].0, "agree_to_terms");
        form.agree_to_terms = true;
        assert!(validate_step(&form, 3).is_empty());
    }
}
