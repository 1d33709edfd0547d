//! `Organization` schema.

use serde_json::Value;

use super::compose;
use crate::config::{JsonMap, OrganizationConfig};
use crate::seo::ScriptTag;

/// Compose the `Organization` document; `sameAs` only when non-empty.
pub fn organization(company: &OrganizationConfig) -> ScriptTag {
    let mut fields = JsonMap::new();
    fields.insert("name".into(), company.name.as_str().into());
    fields.insert("url".into(), company.url.as_str().into());
    fields.insert("logo".into(), company.logo.as_str().into());
    if !company.same_as.is_empty() {
        let same_as = company.same_as.iter().map(|s| Value::from(s.as_str()));
        fields.insert("sameAs".into(), Value::Array(same_as.collect()));
    }

    compose("Organization", fields)
}
