//! `WebSite` schema with an optional sitelinks search box.

use super::{compose, nested};
use crate::config::{JsonMap, WebsiteConfig};
use crate::seo::ScriptTag;

/// Placeholder the search engine substitutes with the user's query.
const SEARCH_TERM: &str = "search_term_string";

/// Compose the `WebSite` document.
///
/// `alternateName` is included when set; a `searchUrl` adds a
/// `potentialAction` of type `SearchAction`.
pub fn website(site: &WebsiteConfig) -> ScriptTag {
    let mut fields = JsonMap::new();
    fields.insert("name".into(), site.name.as_str().into());
    fields.insert("url".into(), site.url.as_str().into());

    if let Some(alternate) = site.alternate_name.as_deref().filter(|s| !s.is_empty()) {
        fields.insert("alternateName".into(), alternate.into());
    }

    if let Some(search_url) = site.search_url.as_deref().filter(|s| !s.is_empty()) {
        let mut action = JsonMap::new();
        action.insert("target".into(), format!("{search_url}={{{SEARCH_TERM}}}").into());
        action.insert(
            "query-input".into(),
            format!("required name={SEARCH_TERM}").into(),
        );
        fields.insert("potentialAction".into(), nested("SearchAction", action));
    }

    compose("WebSite", fields)
}
