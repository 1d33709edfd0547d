//! Head composition.
//!
//! # Module Structure
//!
//! ```text
//! seo/
//! ├── tag.rs        # MetaTag, LinkTag, ScriptTag, Tag
//! ├── resolve.rs    # override → page fallback
//! ├── meta.rs       # <meta> builder
//! │   ├── og.rs     # Open Graph group
//! │   └── twitter.rs# Twitter Card group
//! ├── link.rs       # <link> builder (icons, manifest)
//! ├── script.rs     # <script> builder
//! ├── schema/       # JSON-LD documents
//! └── mod.rs        # compose, HeadDescriptor (this file)
//! ```
//!
//! [`compose`] runs the three builders, appends the caller's raw arrays and
//! forwards every unconsumed page key in [`HeadDescriptor::rest`].

mod link;
mod meta;
mod og;
mod resolve;
pub mod schema;
mod script;
mod tag;
mod twitter;

pub use link::{APPLE_TOUCH_ICON_SIZES, CHROME_ICONS, build_link};
pub use meta::build_meta;
pub use og::{OpenGraph, build_open_graph};
pub use resolve::resolve;
pub use script::build_script;
pub use tag::{JSON_LD, LinkTag, MetaTag, ScriptTag, Tag};
pub use twitter::build_twitter_card;

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::config::{JsonMap, PageConfig};
use crate::debug;

/// Everything a head manager needs for one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeadDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub meta: Vec<MetaTag>,
    pub link: Vec<LinkTag>,
    pub script: Vec<ScriptTag>,
    /// Page keys not consumed by composition, forwarded as is.
    #[serde(flatten)]
    pub rest: JsonMap,
}

impl HeadDescriptor {
    /// All tags in document order: title, meta, link, script.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        let title = self.title.iter().map(|text| Tag::Title { text: text.clone() });
        title
            .chain(self.meta.iter().cloned().map(Tag::from))
            .chain(self.link.iter().cloned().map(Tag::from))
            .chain(self.script.iter().cloned().map(Tag::from))
    }

    /// Render as HTML, one element per line.
    pub fn to_html(&self) -> String {
        self.tags()
            .map(|tag| tag.to_html())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn len(&self) -> usize {
        usize::from(self.title.is_some()) + self.meta.len() + self.link.len() + self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compose the head of a page.
///
/// Computed tags come first, then the page's own `meta`, `link` and `script`
/// entries. Exact duplicates within each group are dropped, keeping the
/// first occurrence.
pub fn compose(page: &PageConfig) -> HeadDescriptor {
    let head = HeadDescriptor {
        title: page.title.clone(),
        meta: merge(build_meta(page), &page.meta),
        link: merge(build_link(page), &page.link),
        script: merge(build_script(page), &page.script),
        rest: page.rest.clone(),
    };

    debug!(
        "compose";
        "{} meta, {} link, {} script, {} passthrough",
        head.meta.len(),
        head.link.len(),
        head.script.len(),
        head.rest.len()
    );

    head
}

/// `computed ++ raw` without exact duplicates.
///
/// Tags are compared by their serialized form, which covers the extra
/// attributes of page-supplied entries.
fn merge<T: Clone + Serialize>(computed: Vec<T>, raw: &[T]) -> Vec<T> {
    let mut seen = FxHashSet::default();
    computed
        .into_iter()
        .chain(raw.iter().cloned())
        .filter(|tag| serde_json::to_string(tag).ok().is_none_or(|key| seen.insert(key)))
        .collect()
}
