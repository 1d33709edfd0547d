//! Page configuration: the structured input of head composition.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Nested sections
//! │   ├── social     # openGraph, twitterCard
//! │   └── schema     # company, website, breadcrumbs, schemas
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! └── mod.rs         # PageConfig (this file)
//! ```
//!
//! Page files are TOML or JSON with camelCase keys. Keys that are not part
//! of [`PageConfig`] are kept in [`PageConfig::rest`] and forwarded to the
//! head manager untouched.

pub mod section;
pub mod types;
mod util;

pub use section::{
    Breadcrumb, OpenGraphConfig, OrganizationConfig, SchemaEntry, TwitterCardConfig,
    WebsiteConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::{find_config_file, find_config_file_from};

use crate::seo::{LinkTag, MetaTag, ScriptTag};
use serde::Deserialize;
use std::{fs, path::Path};

/// Raw JSON object (passthrough options).
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Default name of the site-wide defaults file.
pub const SITE_CONFIG_NAME: &str = "headkit.toml";

/// On-disk format of a page file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Toml,
    Json,
}

impl SourceFormat {
    /// `.json` files are JSON, everything else is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

// ============================================================================
// page configuration
// ============================================================================

/// Everything needed to compose one page head.
///
/// All fields are optional. Text fields that are empty behave exactly like
/// absent ones: the tag they drive is omitted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Document title, passed through to the head manager.
    pub title: Option<String>,
    pub description: Option<String>,
    /// Shared image for OpenGraph and Twitter cards.
    pub image: Option<String>,
    /// Canonical page URL. Consumed, emits no tag.
    pub url: Option<String>,

    pub open_graph: Option<OpenGraphConfig>,
    pub twitter_card: Option<TwitterCardConfig>,

    pub website: Option<WebsiteConfig>,
    pub company: Option<OrganizationConfig>,
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Pre-built JSON-LD, emitted after the generated schemas.
    pub schemas: Vec<SchemaEntry>,

    pub apple_touch_icons_root: Option<String>,
    pub chrome_icons_root: Option<String>,
    pub favicons_manifest_url: Option<String>,

    pub tile_color: Option<String>,
    pub tile_image: Option<String>,
    pub theme_color: Option<String>,
    pub google_site_verification: Option<String>,
    pub yandex_verification: Option<String>,
    pub facebook_admins: Option<String>,
    pub facebook_app_id: Option<String>,

    /// Raw tags appended after the computed ones.
    pub meta: Vec<MetaTag>,
    pub link: Vec<LinkTag>,
    pub script: Vec<ScriptTag>,

    /// Head manager options this crate does not interpret.
    #[serde(flatten)]
    pub rest: JsonMap,
}

impl PageConfig {
    /// Parse a page from a string.
    pub fn parse(content: &str, format: SourceFormat) -> Result<Self, ConfigError> {
        Self::parse_with_ignored(content, format).map(|(config, _)| config)
    }

    /// Parse a page, collecting unknown keys inside nested sections.
    ///
    /// Unknown top-level keys are not "ignored": they land in `rest`.
    pub fn parse_with_ignored(
        content: &str,
        format: SourceFormat,
    ) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let on_ignored = |path: serde_ignored::Path| ignored.push(path.to_string());

        let config: Self = match format {
            SourceFormat::Toml => {
                let deserializer = toml::Deserializer::new(content);
                serde_ignored::deserialize(deserializer, on_ignored)?
            }
            SourceFormat::Json => {
                let mut deserializer = serde_json::Deserializer::from_str(content);
                let config: Self = serde_ignored::deserialize(&mut deserializer, on_ignored)?;
                deserializer.end()?;
                config
            }
        };

        Ok((config, ignored))
    }

    /// Load a page file, picking the format from its extension.
    pub fn load(path: &Path) -> Result<(Self, Vec<String>), ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::parse_with_ignored(&content, SourceFormat::from_path(path))
    }

    /// Fill unset fields from site-wide defaults.
    ///
    /// Scalars and whole sections are taken from `site` only when unset here.
    /// Raw tag arrays and schemas are concatenated site-first; passthrough
    /// keys already present on the page win.
    pub fn inherit(mut self, site: &PageConfig) -> Self {
        fn fill<T: Clone>(field: &mut Option<T>, fallback: &Option<T>) {
            if field.is_none() {
                field.clone_from(fallback);
            }
        }

        fn prepend<T: Clone>(field: &mut Vec<T>, site: &[T]) {
            if !site.is_empty() {
                let own = std::mem::take(field);
                field.extend(site.iter().cloned());
                field.extend(own);
            }
        }

        fill(&mut self.title, &site.title);
        fill(&mut self.description, &site.description);
        fill(&mut self.image, &site.image);
        fill(&mut self.url, &site.url);
        fill(&mut self.open_graph, &site.open_graph);
        fill(&mut self.twitter_card, &site.twitter_card);
        fill(&mut self.website, &site.website);
        fill(&mut self.company, &site.company);
        fill(&mut self.apple_touch_icons_root, &site.apple_touch_icons_root);
        fill(&mut self.chrome_icons_root, &site.chrome_icons_root);
        fill(&mut self.favicons_manifest_url, &site.favicons_manifest_url);
        fill(&mut self.tile_color, &site.tile_color);
        fill(&mut self.tile_image, &site.tile_image);
        fill(&mut self.theme_color, &site.theme_color);
        fill(&mut self.google_site_verification, &site.google_site_verification);
        fill(&mut self.yandex_verification, &site.yandex_verification);
        fill(&mut self.facebook_admins, &site.facebook_admins);
        fill(&mut self.facebook_app_id, &site.facebook_app_id);

        if self.breadcrumbs.is_empty() {
            self.breadcrumbs.clone_from(&site.breadcrumbs);
        }
        prepend(&mut self.schemas, &site.schemas);
        prepend(&mut self.meta, &site.meta);
        prepend(&mut self.link, &site.link);
        prepend(&mut self.script, &site.script);

        for (key, value) in &site.rest {
            self.rest
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }

        self
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Collect every validation finding without failing.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        if self.description.as_deref().is_none_or(str::is_empty) {
            diag.warn(
                FieldPath::new("description"),
                "not set, the description meta tag is omitted",
            );
        }

        if let Some(company) = &self.company {
            company.validate(&mut diag);
        }
        if let Some(website) = &self.website {
            website.validate(&mut diag);
        }
        for (index, crumb) in self.breadcrumbs.iter().enumerate() {
            crumb.validate(index, &mut diag);
        }

        diag
    }

    /// Fail if any structured section is missing a required value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.diagnose()
            .into_result()
            .map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// tests
// ============================================================================
