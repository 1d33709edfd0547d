//! Open Graph meta tags.
//!
//! Each text field resolves as `openGraph.field`, then the page field of the
//! same name, then omitted.

use super::resolve::resolve;
use super::tag::MetaTag;
use crate::config::{OpenGraphConfig, PageConfig};

/// Open Graph values after override resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGraph<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub image: Option<&'a str>,
    pub image_width: u32,
    pub image_height: u32,
    pub og_type: &'a str,
    pub site_name: Option<&'a str>,
}

impl<'a> OpenGraph<'a> {
    /// Resolve Open Graph values from a page. A missing `openGraph` section
    /// behaves like an empty one.
    pub fn resolve(page: &'a PageConfig, og: &'a OpenGraphConfig) -> Self {
        Self {
            title: resolve(og.title.as_deref(), page.title.as_deref()),
            description: resolve(og.description.as_deref(), page.description.as_deref()),
            image: resolve(og.image.as_deref(), page.image.as_deref()),
            image_width: og.image_width(),
            image_height: og.image_height(),
            og_type: og.og_type(),
            site_name: og.site_name.as_deref(),
        }
    }

    pub fn tags(&self) -> Vec<MetaTag> {
        let has_image = self.image.is_some();
        let width = self.image_width.to_string();
        let height = self.image_height.to_string();

        [
            MetaTag::optional("og:title", self.title),
            MetaTag::optional("og:description", self.description),
            MetaTag::optional("og:image", self.image),
            MetaTag::when("og:image:width", Some(width.as_str()), has_image),
            MetaTag::when("og:image:height", Some(height.as_str()), has_image),
            Some(MetaTag::new("og:type", self.og_type)),
            MetaTag::optional("og:site_name", self.site_name),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Build the Open Graph group of a page.
pub fn build_open_graph(page: &PageConfig) -> Vec<MetaTag> {
    let defaults = OpenGraphConfig::default();
    let og = page.open_graph.as_ref().unwrap_or(&defaults);
    OpenGraph::resolve(page, og).tags()
}
