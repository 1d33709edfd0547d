//! Twitter Card meta tags.

use super::resolve::resolve;
use super::tag::MetaTag;
use crate::config::{PageConfig, TwitterCardConfig};

/// Build the Twitter Card group of a page.
///
/// `title`, `description` and `image` resolve exactly like their Open Graph
/// counterparts; `twitter:card` is always present.
pub fn build_twitter_card(page: &PageConfig) -> Vec<MetaTag> {
    let defaults = TwitterCardConfig::default();
    let card = page.twitter_card.as_ref().unwrap_or(&defaults);

    [
        MetaTag::optional(
            "twitter:title",
            resolve(card.title.as_deref(), page.title.as_deref()),
        ),
        Some(MetaTag::new("twitter:card", card.card_type())),
        MetaTag::optional(
            "twitter:description",
            resolve(card.description.as_deref(), page.description.as_deref()),
        ),
        MetaTag::optional(
            "twitter:image",
            resolve(card.image.as_deref(), page.image.as_deref()),
        ),
        MetaTag::optional("twitter:site", card.site_handler.as_deref()),
        MetaTag::optional("twitter:creator", card.creator_handler.as_deref()),
    ]
    .into_iter()
    .flatten()
    .collect()
}
