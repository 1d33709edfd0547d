//! `<link>` group: touch icons, browser icons and the web app manifest.

use super::tag::LinkTag;
use crate::config::PageConfig;
use crate::utils::url::join_root;

/// Apple touch icon edge lengths, ascending.
pub const APPLE_TOUCH_ICON_SIZES: [u32; 9] = [57, 60, 72, 76, 114, 120, 144, 152, 180];

/// Browser icon sizes and the file prefix each one is published under.
///
/// The 192px icon doubles as the Android home-screen icon, hence its name.
pub const CHROME_ICONS: [(u32, &str); 4] = [
    (16, "favicon"),
    (32, "favicon"),
    (96, "favicon"),
    (192, "android-chrome"),
];

fn sizes(edge: u32) -> String {
    format!("{edge}x{edge}")
}

/// One `apple-touch-icon` per size, or nothing without a root.
pub fn apple_touch_icons(root: &str) -> Vec<LinkTag> {
    APPLE_TOUCH_ICON_SIZES
        .iter()
        .map(|&edge| {
            let sizes = sizes(edge);
            let href = join_root(root, &format!("apple-touch-icon-{sizes}.png"));
            LinkTag::new("apple-touch-icon", href).with_sizes(sizes)
        })
        .collect()
}

/// One PNG `icon` per entry of [`CHROME_ICONS`].
pub fn chrome_icons(root: &str) -> Vec<LinkTag> {
    CHROME_ICONS
        .iter()
        .map(|&(edge, prefix)| {
            let sizes = sizes(edge);
            let href = join_root(root, &format!("{prefix}-{sizes}.png"));
            LinkTag::new("icon", href)
                .with_type("image/png")
                .with_sizes(sizes)
        })
        .collect()
}

/// Build every computed link tag of a page.
///
/// Groups are all-or-nothing: a group is emitted in full when its root is
/// set and non-empty, and skipped otherwise.
pub fn build_link(page: &PageConfig) -> Vec<LinkTag> {
    let mut links = Vec::new();

    if let Some(root) = non_empty(&page.apple_touch_icons_root) {
        links.extend(apple_touch_icons(root));
    }
    if let Some(root) = non_empty(&page.chrome_icons_root) {
        links.extend(chrome_icons(root));
    }
    if let Some(manifest) = non_empty(&page.favicons_manifest_url) {
        links.push(LinkTag::new("manifest", manifest));
    }

    links
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
