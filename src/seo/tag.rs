//! Head tag descriptors.
//!
//! These are the units handed to a document-head manager: plain data with no
//! behavior beyond construction and HTML rendering. Field names serialize to
//! the head manager's vocabulary (`innerHTML`, `type`).
//!
//! Computed tags only fill the typed fields. Entries supplied by the page keep
//! every other attribute (`property`, `charset`, `src`, `crossorigin`, ...)
//! in `attrs`, serialized back inline and in source order.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::JsonMap;
use crate::utils::html::{element, escape, escape_script};

/// MIME type of every JSON-LD script.
pub const JSON_LD: &str = "application/ld+json";

/// `<meta name=".." content="..">`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaTag {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
    #[serde(flatten)]
    pub attrs: JsonMap,
}

impl MetaTag {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            attrs: JsonMap::new(),
        }
    }

    /// Emit `{name, content}` iff `content` is present, non-empty and
    /// `predicate` holds.
    ///
    /// ```ignore
    /// MetaTag::when("og:image:width", Some("1200"), image.is_some())
    /// ```
    pub fn when(name: &str, content: Option<&str>, predicate: bool) -> Option<Self> {
        content
            .filter(|content| predicate && !content.is_empty())
            .map(|content| Self::new(name, content))
    }

    /// [`MetaTag::when`] without an auxiliary predicate.
    pub fn optional(name: &str, content: Option<&str>) -> Option<Self> {
        Self::when(name, content, true)
    }

    pub fn to_html(&self) -> String {
        let mut attrs = Attrs::default();
        attrs.text("name", &self.name);
        attrs.text("content", &self.content);
        attrs.extra(&self.attrs);
        attrs.render("meta", None)
    }
}

/// `<link rel=".." href=".." sizes=".." type="..">`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkTag {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub rel: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
    #[serde(flatten)]
    pub attrs: JsonMap,
}

impl LinkTag {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            ..Default::default()
        }
    }

    pub fn with_sizes(mut self, sizes: impl Into<String>) -> Self {
        self.sizes = Some(sizes.into());
        self
    }

    pub fn with_type(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    pub fn to_html(&self) -> String {
        let mut attrs = Attrs::default();
        attrs.text("rel", &self.rel);
        attrs.optional("sizes", self.sizes.as_deref());
        attrs.optional("type", self.mime.as_deref());
        attrs.extra(&self.attrs);
        attrs.text("href", &self.href);
        attrs.render("link", None)
    }
}

/// Inline or external `<script>`.
///
/// Generated scripts always carry a JSON-LD body; page-supplied ones may be
/// anything a head manager accepts, such as `{src, async}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptTag {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
    #[serde(rename = "innerHTML", default, skip_serializing_if = "String::is_empty")]
    pub inner_html: String,
    #[serde(flatten)]
    pub attrs: JsonMap,
}

impl ScriptTag {
    /// A JSON-LD script named `name` with `text` as its body.
    pub fn json_ld(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime: Some(JSON_LD.to_string()),
            inner_html: text.into(),
            attrs: JsonMap::new(),
        }
    }

    pub fn to_html(&self) -> String {
        let mut attrs = Attrs::default();
        attrs.text("name", &self.name);
        attrs.optional("type", self.mime.as_deref());
        attrs.extra(&self.attrs);
        attrs.render("script", Some(&*escape_script(&self.inner_html)))
    }
}

/// Attribute list in render order. Empty typed fields are skipped.
#[derive(Default)]
struct Attrs<'a>(Vec<(&'a str, Cow<'a, str>)>);

impl<'a> Attrs<'a> {
    fn text(&mut self, name: &'a str, value: &'a str) {
        if !value.is_empty() {
            self.0.push((name, Cow::Borrowed(value)));
        }
    }

    fn optional(&mut self, name: &'a str, value: Option<&'a str>) {
        self.text(name, value.unwrap_or_default());
    }

    /// `true` renders as an empty attribute; `false` and `null` drop it.
    fn extra(&mut self, attrs: &'a JsonMap) {
        for (name, value) in attrs {
            let value = match value {
                Value::Null | Value::Bool(false) => continue,
                Value::Bool(true) => Cow::Borrowed(""),
                Value::String(text) => Cow::Borrowed(text.as_str()),
                other => Cow::Owned(other.to_string()),
            };
            self.0.push((name.as_str(), value));
        }
    }

    fn render(&self, tag: &str, body: Option<&str>) -> String {
        let pairs: Vec<(&str, &str)> = self.0.iter().map(|(k, v)| (*k, v.as_ref())).collect();
        element(tag, &pairs, body)
    }
}

/// Any single head tag, in the order a head manager should receive it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tag", rename_all = "lowercase")]
pub enum Tag {
    Title { text: String },
    Meta(MetaTag),
    Link(LinkTag),
    Script(ScriptTag),
}

impl Tag {
    pub fn to_html(&self) -> String {
        match self {
            Self::Title { text } => element("title", &[], Some(&*escape(text))),
            Self::Meta(meta) => meta.to_html(),
            Self::Link(link) => link.to_html(),
            Self::Script(script) => script.to_html(),
        }
    }
}

impl From<MetaTag> for Tag {
    fn from(meta: MetaTag) -> Self {
        Self::Meta(meta)
    }
}

impl From<LinkTag> for Tag {
    fn from(link: LinkTag) -> Self {
        Self::Link(link)
    }
}

impl From<ScriptTag> for Tag {
    fn from(script: ScriptTag) -> Self {
        Self::Script(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_meta_when() {
        assert_eq!(
            MetaTag::when("theme-color", Some("#fff"), true),
            Some(MetaTag::new("theme-color", "#fff"))
        );
        assert_eq!(MetaTag::when("theme-color", Some("#fff"), false), None);
        assert_eq!(MetaTag::when("theme-color", Some(""), true), None);
        assert_eq!(MetaTag::optional("theme-color", None), None);
    }

    #[test]
    fn test_link_serialize_skips_absent_fields() {
        let link = LinkTag::new("manifest", "/manifest.json");
        assert_eq!(
            serde_json::to_value(&link).unwrap(),
            json!({"rel": "manifest", "href": "/manifest.json"})
        );

        let icon = LinkTag::new("icon", "/a.png")
            .with_sizes("16x16")
            .with_type("image/png");
        assert_eq!(
            serde_json::to_value(&icon).unwrap(),
            json!({"rel": "icon", "href": "/a.png", "sizes": "16x16", "type": "image/png"})
        );
    }

    #[test]
    fn test_script_serialize_names() {
        let script = ScriptTag::json_ld("WebSite", "{}");
        assert_eq!(
            serde_json::to_value(&script).unwrap(),
            json!({"name": "WebSite", "type": "application/ld+json", "innerHTML": "{}"})
        );
    }

    #[test]
    fn test_raw_entries_keep_extra_attributes() {
        let meta: MetaTag =
            serde_json::from_value(json!({"property": "og:locale", "content": "en_US"})).unwrap();
        assert!(meta.name.is_empty());
        assert_eq!(
            serde_json::to_value(&meta).unwrap(),
            json!({"content": "en_US", "property": "og:locale"})
        );

        let script: ScriptTag =
            serde_json::from_value(json!({"src": "/app.js", "async": true})).unwrap();
        assert!(script.mime.is_none());
        assert_eq!(
            serde_json::to_value(&script).unwrap(),
            json!({"src": "/app.js", "async": true})
        );

        let link: LinkTag = serde_json::from_value(
            json!({"rel": "preconnect", "href": "https://cdn.test", "crossorigin": "anonymous"}),
        )
        .unwrap();
        assert_eq!(link.attrs.get("crossorigin"), Some(&json!("anonymous")));
    }

    #[test]
    fn test_render_extra_attributes() {
        let meta: MetaTag = serde_json::from_value(json!({"charset": "utf-8"})).unwrap();
        assert_eq!(meta.to_html(), r#"<meta charset="utf-8"/>"#);

        let script: ScriptTag =
            serde_json::from_value(json!({"src": "/app.js", "async": true, "defer": false}))
                .unwrap();
        assert_eq!(script.to_html(), r#"<script src="/app.js" async=""></script>"#);

        let link: LinkTag = serde_json::from_value(
            json!({"rel": "preconnect", "href": "https://cdn.test", "crossorigin": "anonymous"}),
        )
        .unwrap();
        assert_eq!(
            link.to_html(),
            r#"<link rel="preconnect" crossorigin="anonymous" href="https://cdn.test"/>"#
        );
    }

    #[test]
    fn test_render_meta() {
        assert_eq!(
            MetaTag::new("description", "Fish & chips").to_html(),
            r#"<meta name="description" content="Fish &amp; chips"/>"#
        );
    }

    #[test]
    fn test_render_link() {
        let link = LinkTag::new("apple-touch-icon", "/a-57x57.png").with_sizes("57x57");
        assert_eq!(
            link.to_html(),
            r#"<link rel="apple-touch-icon" sizes="57x57" href="/a-57x57.png"/>"#
        );
    }

    #[test]
    fn test_render_script_keeps_json_raw() {
        let script = ScriptTag::json_ld("Organization", r#"{"name": "A & B</script>"}"#);
        assert_eq!(
            script.to_html(),
            r#"<script name="Organization" type="application/ld+json">{"name": "A & B<\/script>"}</script>"#
        );
    }

    #[test]
    fn test_render_title_escapes() {
        let title = Tag::Title {
            text: "<Home>".into(),
        };
        assert_eq!(title.to_html(), "<title>&lt;Home&gt;</title>");
    }
}
