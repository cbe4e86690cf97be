/// The effective target of an anchor node after policy is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct SafeHref {
    pub href: String,
    /// External targets open in a new browsing context.
    pub external: bool,
}

const BLOCKED: &str = "#";

/// Unconditional link-target policy. Only `http*`, rooted paths, and
/// fragments pass through; every other scheme (javascript:, data:,
/// vbscript:, protocol-relative, ...) collapses to `#`.
pub fn sanitize_href(href: &str) -> SafeHref {
    if href.starts_with("http") {
        SafeHref {
            href: href.to_string(),
            external: true,
        }
    } else if href.starts_with('/') || href.starts_with('#') {
        SafeHref {
            href: href.to_string(),
            external: false,
        }
    } else {
        SafeHref {
            href: BLOCKED.to_string(),
            external: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_https_passes_as_external() {
        let safe = sanitize_href("https://example.com");
        assert_eq!(safe.href, "https://example.com");
        assert!(safe.external);
    }

    #[test]
    fn test_http_passes_as_external() {
        let safe = sanitize_href("http://example.com/a?b=c");
        assert_eq!(safe.href, "http://example.com/a?b=c");
        assert!(safe.external);
    }

    #[test]
    fn test_rooted_path_passes_same_context() {
        let safe = sanitize_href("/settings");
        assert_eq!(safe.href, "/settings");
        assert!(!safe.external);
    }

    #[test]
    fn test_fragment_passes_same_context() {
        let safe = sanitize_href("#section-2");
        assert_eq!(safe.href, "#section-2");
        assert!(!safe.external);
    }

    #[test]
    fn test_javascript_uri_blocked() {
        assert_eq!(sanitize_href("javascript:alert(1)").href, "#");
    }

    #[test]
    fn test_data_uri_blocked() {
        assert_eq!(
            sanitize_href("data:text/html,<script>alert(1)</script>").href,
            "#"
        );
    }

    #[test]
    fn test_relative_path_blocked() {
        assert_eq!(sanitize_href("../secret").href, "#");
    }

    #[test]
    fn test_empty_href_blocked() {
        assert_eq!(sanitize_href("").href, "#");
    }
}
