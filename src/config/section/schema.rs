//! Structured data sections (`company`, `website`, `breadcrumbs`, `schemas`).
//!
//! Required keys are enforced by deserialization; empty values are caught by
//! `validate()` so programmatically built configs get the same checks.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::seo::{JSON_LD, ScriptTag};

/// `schema.org/WebSite` input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteConfig {
    pub name: String,
    #[serde(default)]
    pub alternate_name: Option<String>,
    pub url: String,
    /// Search endpoint prefix; `={search_term_string}` is appended to it.
    #[serde(default)]
    pub search_url: Option<String>,
}

impl WebsiteConfig {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alternate_name: None,
            url: url.into(),
            search_url: None,
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        require(&self.name, FieldPath::new("website.name"), diag);
        require(&self.url, FieldPath::new("website.url"), diag);
    }
}

/// `schema.org/Organization` input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationConfig {
    pub name: String,
    pub url: String,
    pub logo: String,
    /// Profile URLs on other sites (social accounts, wikis, ...).
    #[serde(default)]
    pub same_as: Vec<String>,
}

impl OrganizationConfig {
    pub fn new(name: impl Into<String>, url: impl Into<String>, logo: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            logo: logo.into(),
            same_as: Vec::new(),
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        require(&self.name, FieldPath::new("company.name"), diag);
        require(&self.url, FieldPath::new("company.url"), diag);
        require(&self.logo, FieldPath::new("company.logo"), diag);
    }
}

/// One step of a `BreadcrumbList`, in trail order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// URL identifying the step (`@id`).
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Breadcrumb {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: None,
        }
    }

    pub fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        let field = FieldPath::new("breadcrumbs");
        if self.id.is_empty() {
            diag.error(field, format!("entry {} has an empty `id`", index + 1));
        }
        if self.name.is_empty() {
            diag.error(field, format!("entry {} has an empty `name`", index + 1));
        }
    }
}

/// Pre-built structured data passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaEntry {
    /// Already serialized JSON-LD text.
    Serialized(String),
    /// A complete script descriptor.
    Script(ScriptTag),
}

impl SchemaEntry {
    /// Script name given to serialized entries.
    pub const SERIALIZED_NAME: &'static str = "schema";

    pub fn to_script(&self) -> ScriptTag {
        match self {
            Self::Serialized(text) => ScriptTag::json_ld(Self::SERIALIZED_NAME, text.as_str()),
            Self::Script(script) => {
                let mut script = script.clone();
                script.mime.get_or_insert_with(|| JSON_LD.to_string());
                script
            }
        }
    }
}

fn require(value: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if value.trim().is_empty() {
        diag.error_with_hint(
            field,
            "required field is empty",
            format!("set {} or remove the section", field.as_str()),
        );
    }
}
