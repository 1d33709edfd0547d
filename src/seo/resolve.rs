//! Override resolution shared by the OpenGraph and Twitter builders.

/// Pick the specific override, else the shared fallback, else nothing.
///
/// Empty strings count as absent at both levels, so an explicit empty
/// override still falls through to the page value.
pub fn resolve<'a>(specific: Option<&'a str>, fallback: Option<&'a str>) -> Option<&'a str> {
    specific
        .filter(|s| !s.is_empty())
        .or_else(|| fallback.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specific_wins() {
        assert_eq!(resolve(Some("og"), Some("page")), Some("og"));
    }

    #[test]
    fn test_fallback_when_absent_or_empty() {
        assert_eq!(resolve(None, Some("page")), Some("page"));
        assert_eq!(resolve(Some(""), Some("page")), Some("page"));
    }

    #[test]
    fn test_omit_when_both_missing() {
        assert_eq!(resolve(None, None), None);
        assert_eq!(resolve(Some(""), Some("")), None);
    }
}
