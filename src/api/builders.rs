//! Ecosystem Builders Façade
//!
//! Hubs, incubators, accelerators, and universities share one record shape
//! and one set of verbs; only the collection path differs.

use serde_json::{json, Map, Value};

use super::client::{self, ApiError, Page};
use super::models::EcosystemBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderKind {
    Hub,
    Incubator,
    Accelerator,
    University,
}

impl BuilderKind {
    pub const ALL: [BuilderKind; 4] = [
        BuilderKind::Hub,
        BuilderKind::Incubator,
        BuilderKind::Accelerator,
        BuilderKind::University,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            BuilderKind::Hub => "/hubs/",
            BuilderKind::Incubator => "/incubators/",
            BuilderKind::Accelerator => "/accelerators/",
            BuilderKind::University => "/universities/",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BuilderKind::Hub => "Innovation Hubs",
            BuilderKind::Incubator => "Incubators",
            BuilderKind::Accelerator => "Accelerators",
            BuilderKind::University => "Universities",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            BuilderKind::Hub => "Hub",
            BuilderKind::Incubator => "Incubator",
            BuilderKind::Accelerator => "Accelerator",
            BuilderKind::University => "University",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            BuilderKind::Hub => {
                "Co-working and community spaces where founders meet, build, and share resources."
            }
            BuilderKind::Incubator => {
                "Programs nurturing early-stage ideas into companies with mentorship and facilities."
            }
            BuilderKind::Accelerator => {
                "Cohort-based programs that fast-track startups with funding and intensive support."
            }
            BuilderKind::University => {
                "Universities contributing research, talent, and entrepreneurship programs."
            }
        }
    }
}

pub async fn list(kind: BuilderKind) -> Result<Vec<EcosystemBuilder>, ApiError> {
    let page: Page<EcosystemBuilder> = client::get_page(kind.path()).await?;
    Ok(page.items)
}

/// Listing form for a new builder organization
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuilderForm {
    pub name: String,
    pub description: String,
    pub website: String,
    pub city: String,
    pub country: String,
    pub contact_email: String,
}

/// Empty optional fields are dropped; `name` is always sent
pub fn listing_payload(form: &BuilderForm) -> Value {
    let mut payload = Map::new();
    payload.insert("name".into(), json!(form.name));
    let optional = [
        ("description", &form.description),
        ("website", &form.website),
        ("city", &form.city),
        ("country", &form.country),
        ("contact_email", &form.contact_email),
    ];
    for (key, value) in optional {
        if !value.is_empty() {
            payload.insert(key.into(), json!(value));
        }
    }
    Value::Object(payload)
}

pub async fn create(kind: BuilderKind, form: &BuilderForm) -> Result<EcosystemBuilder, ApiError> {
    client::post(kind.path(), &listing_payload(form)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_paths() {
        assert_eq!(BuilderKind::Hub.path(), "/hubs/");
        assert_eq!(BuilderKind::University.path(), "/universities/");
    }

    #[test]
    fn test_listing_payload_drops_empty_fields() {
        let form = BuilderForm {
            name: "iceaddis".to_string(),
            city: "Addis Ababa".to_string(),
            ..BuilderForm::default()
        };
        let payload = listing_payload(&form);
        assert_eq!(payload["name"], "iceaddis");
        assert_eq!(payload["city"], "Addis Ababa");
        assert!(payload.get("website").is_none());
        assert!(payload.get("description").is_none());
    }
}
