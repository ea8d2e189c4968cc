use url::Url;

/// Returns true if `s` parses as a URL with both a scheme and a non-empty host
pub fn is_absolute_url(s: &str) -> bool {
    match Url::parse(s) {
        Ok(url) => !url.scheme().is_empty() && url.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}

/// Returns true if the reference is root-relative and can be archived locally
///
/// This is a purely syntactic check. Protocol-relative references (`//host/path`)
/// point at another host and are not local.
pub fn is_local_asset_reference(s: &str) -> bool {
    s.starts_with('/') && !s.starts_with("//")
}

/// Returns true if an anchor `href` value counts as a link in the metadata
///
/// Only the no-op placeholders `#` and `javascript:void(...)` are excluded;
/// empty values and external URLs still count.
pub fn is_meaningful_link(href: &str) -> bool {
    if href == "#" {
        return false;
    }
    !href.starts_with("javascript:void")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_urls() {
        assert!(is_absolute_url("http://example.com"));
        assert!(is_absolute_url("https://example.com/docs/page.html?x=1"));
        assert!(is_absolute_url("http://localhost:8080/"));

        assert!(!is_absolute_url("not a url"));
        assert!(!is_absolute_url("example.com/page"));
        assert!(!is_absolute_url("/images/logo.png"));
        assert!(!is_absolute_url("mailto:someone@example.com"));
        assert!(!is_absolute_url(""));
    }

    #[test]
    fn test_local_asset_references() {
        assert!(is_local_asset_reference("/images/logo.png"));
        assert!(is_local_asset_reference("/app.js?v=2"));
        assert!(is_local_asset_reference("/"));

        // Anything that is not root-relative stays on the page untouched
        assert!(!is_local_asset_reference("https://cdn.example.com/app.js"));
        assert!(!is_local_asset_reference("//cdn.example.com/app.js"));
        assert!(!is_local_asset_reference("./images/logo.png"));
        assert!(!is_local_asset_reference("images/logo.png"));
        assert!(!is_local_asset_reference("data:image/png;base64,AAAA"));
        assert!(!is_local_asset_reference("#anchor"));
        assert!(!is_local_asset_reference(""));
    }

    #[test]
    fn test_meaningful_links() {
        assert!(!is_meaningful_link("#"));
        assert!(!is_meaningful_link("javascript:void(0)"));
        assert!(!is_meaningful_link("javascript:void(0);"));

        assert!(is_meaningful_link(""));
        assert!(is_meaningful_link("#section"));
        assert!(is_meaningful_link("/about"));
        assert!(is_meaningful_link("https://other.example.com"));
        assert!(is_meaningful_link("javascript:alert(1)"));
    }
}
