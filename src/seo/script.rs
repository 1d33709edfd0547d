//! `<script>` group: structured data.

use super::schema;
use super::tag::ScriptTag;
use crate::config::PageConfig;

/// Build every computed script tag of a page.
///
/// Order: `Organization`, `WebSite`, `BreadcrumbList`, then the pre-built
/// `schemas` entries as given.
pub fn build_script(page: &PageConfig) -> Vec<ScriptTag> {
    let mut scripts = Vec::with_capacity(3 + page.schemas.len());

    if let Some(company) = &page.company {
        scripts.push(schema::organization(company));
    }
    if let Some(website) = &page.website {
        scripts.push(schema::website(website));
    }
    if !page.breadcrumbs.is_empty() {
        scripts.push(schema::breadcrumbs(&page.breadcrumbs));
    }
    scripts.extend(page.schemas.iter().map(|entry| entry.to_script()));

    scripts
}
