//! URL string helpers.
//!
//! Icon roots are caller-supplied and never parsed or validated, only joined.

/// Join an asset root and a file name with exactly one `/` between them.
///
/// # Examples
/// ```ignore
/// join_root("https://cdn.test/", "a.png") -> "https://cdn.test/a.png"
/// join_root("https://cdn.test", "a.png")  -> "https://cdn.test/a.png"
/// join_root("/icons", "a.png")            -> "/icons/a.png"
/// ```
pub fn join_root(root: &str, file: &str) -> String {
    let root = root.trim_end_matches('/');
    let file = file.trim_start_matches('/');
    format!("{root}/{file}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_root_trailing_slash() {
        assert_eq!(
            join_root("https://cdn.test/", "apple-touch-icon-57x57.png"),
            "https://cdn.test/apple-touch-icon-57x57.png"
        );
    }

    #[test]
    fn test_join_root_without_slash() {
        assert_eq!(
            join_root("https://cdn.test/favicons", "favicon-16x16.png"),
            "https://cdn.test/favicons/favicon-16x16.png"
        );
    }

    #[test]
    fn test_join_root_relative() {
        assert_eq!(join_root("/icons//", "/a.png"), "/icons/a.png");
    }
}
