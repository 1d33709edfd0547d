//! Social sharing sections (`openGraph`, `twitterCard`).
//!
//! Every text field here is an override: when absent, the builders fall back
//! to the top-level page field of the same name.

use serde::{Deserialize, Serialize};

/// OpenGraph overrides.
///
/// ```toml
/// [openGraph]
/// title = "Shared title"
/// imageWidth = 1024
/// type = "website"
/// siteName = "Acme"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpenGraphConfig {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub image_width: Option<u32>,
    pub image_height: Option<u32>,
    #[serde(rename = "type")]
    pub og_type: Option<String>,
    pub site_name: Option<String>,
}

impl OpenGraphConfig {
    pub const DEFAULT_IMAGE_WIDTH: u32 = 1200;
    pub const DEFAULT_IMAGE_HEIGHT: u32 = 630;
    pub const DEFAULT_TYPE: &'static str = "article";

    pub fn image_width(&self) -> u32 {
        self.image_width.unwrap_or(Self::DEFAULT_IMAGE_WIDTH)
    }

    pub fn image_height(&self) -> u32 {
        self.image_height.unwrap_or(Self::DEFAULT_IMAGE_HEIGHT)
    }

    /// `og:type`, never empty.
    pub fn og_type(&self) -> &str {
        non_empty_or(self.og_type.as_deref(), Self::DEFAULT_TYPE)
    }
}

/// Twitter Card overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TwitterCardConfig {
    pub card_type: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    /// `@handle` of the site, emitted as `twitter:site`.
    pub site_handler: Option<String>,
    /// `@handle` of the author, emitted as `twitter:creator`.
    pub creator_handler: Option<String>,
}

impl TwitterCardConfig {
    pub const DEFAULT_CARD_TYPE: &'static str = "summary_large_image";

    /// `twitter:card`, never empty.
    pub fn card_type(&self) -> &str {
        non_empty_or(self.card_type.as_deref(), Self::DEFAULT_CARD_TYPE)
    }
}

fn non_empty_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    value.filter(|v| !v.is_empty()).unwrap_or(default)
}
