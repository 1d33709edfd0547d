//! `<meta>` group: page scalars, then Open Graph, then Twitter Card.

use super::og::build_open_graph;
use super::tag::MetaTag;
use super::twitter::build_twitter_card;
use crate::config::PageConfig;

/// Build every computed meta tag of a page.
///
/// Order: description, tile color/image, theme color, site verifications,
/// Facebook ids, then the Open Graph and Twitter groups. Tags whose source
/// field is unset or empty are omitted.
pub fn build_meta(page: &PageConfig) -> Vec<MetaTag> {
    let scalars = [
        ("description", &page.description),
        ("msapplication-TileColor", &page.tile_color),
        ("msapplication-TileImage", &page.tile_image),
        ("theme-color", &page.theme_color),
        ("google-site-verification", &page.google_site_verification),
        ("yandex-verification", &page.yandex_verification),
        ("fb:admins", &page.facebook_admins),
        ("fb:app_id", &page.facebook_app_id),
    ];

    scalars
        .into_iter()
        .filter_map(|(name, value)| MetaTag::optional(name, value.as_deref()))
        .chain(build_open_graph(page))
        .chain(build_twitter_card(page))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(tags: &[MetaTag]) -> Vec<&str> {
        tags.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_empty_page() {
        // Only the always-present type/card tags remain
        assert_eq!(
            names(&build_meta(&PageConfig::default())),
            ["og:type", "twitter:card"]
        );
    }

    #[test]
    fn test_missing_description_is_omitted() {
        let page = PageConfig {
            description: Some(String::new()),
            ..Default::default()
        };
        assert!(build_meta(&page).iter().all(|t| t.name != "description"));
    }

    #[test]
    fn test_scalar_order() {
        let page = PageConfig {
            description: Some("d".into()),
            tile_color: Some("#da532c".into()),
            tile_image: Some("/mstile.png".into()),
            theme_color: Some("#ffffff".into()),
            google_site_verification: Some("g-token".into()),
            yandex_verification: Some("y-token".into()),
            facebook_admins: Some("1234".into()),
            facebook_app_id: Some("5678".into()),
            ..Default::default()
        };

        let tags = build_meta(&page);
        assert_eq!(
            names(&tags[..8]),
            [
                "description",
                "msapplication-TileColor",
                "msapplication-TileImage",
                "theme-color",
                "google-site-verification",
                "yandex-verification",
                "fb:admins",
                "fb:app_id",
            ]
        );
        assert_eq!(tags[4], MetaTag::new("google-site-verification", "g-token"));
    }

    #[test]
    fn test_groups_follow_scalars() {
        let page = PageConfig {
            title: Some("Home".into()),
            description: Some("Welcome".into()),
            theme_color: Some("#fff".into()),
            ..Default::default()
        };

        assert_eq!(
            names(&build_meta(&page)),
            [
                "description",
                "theme-color",
                "og:title",
                "og:description",
                "og:type",
                "twitter:title",
                "twitter:card",
                "twitter:description",
            ]
        );
    }

    #[test]
    fn test_does_not_mutate_input() {
        let page = PageConfig {
            title: Some("Home".into()),
            ..Default::default()
        };
        let before = page.clone();
        let _ = build_meta(&page);
        assert_eq!(page, before);
    }
}
