// src/urls.rs
// =============================================================================
// This module handles URL resolution and origin comparison.
//
// We use the `url` crate to:
// - Parse and validate URLs
// - Resolve relative hrefs against the page they appeared on
// - Compare origins (scheme + host + port) so the crawler never leaves
//   the seed's website
//
// Rust concepts:
// - Result<T, E>: For operations that can fail
// - Custom error types: thiserror derives Display/Error for us
// =============================================================================

use thiserror::Error;
use url::Url;

// Error for a reference that cannot be turned into a valid absolute URL
//
// Raised for unparseable seeds and for hrefs that fail to resolve.
// The crawler recovers from this locally (the offending link is skipped),
// so the type mostly shows up in logs and failure records.
#[derive(Debug, Error)]
#[error("malformed URL '{input}': {source}")]
pub struct MalformedUrl {
    /// The raw string that failed to parse
    pub input: String,
    /// The underlying parse error from the url crate
    #[source]
    pub source: url::ParseError,
}

// Parses a seed URL, which must already be absolute
//
// Example:
//   "https://example.com" -> Ok(Url)
//   "not a url"           -> Err(MalformedUrl)
pub fn parse_absolute(raw: &str) -> Result<Url, MalformedUrl> {
    Url::parse(raw).map_err(|source| MalformedUrl {
        input: raw.to_string(),
        source,
    })
}

// Resolves a possibly-relative href to an absolute URL
//
// Parameters:
//   href: the href value (might be relative, might be absolute)
//   base: the URL of the page the href appeared on
//
// Returns: the resolved URL, or MalformedUrl if it cannot be resolved
//
// Examples:
//   base = "https://example.com/page"
//   href = "/docs" -> "https://example.com/docs"
//   href = "../other" -> "https://example.com/other"
//   href = "//cdn.example.com/x" -> "https://cdn.example.com/x"
//   href = "https://other.com" -> "https://other.com/"
//
// Fragments and query strings are preserved; whether the result is worth
// crawling is the engine's decision, not ours.
pub fn resolve(href: &str, base: &Url) -> Result<Url, MalformedUrl> {
    base.join(href).map_err(|source| MalformedUrl {
        input: href.to_string(),
        source,
    })
}

// Checks whether two URLs belong to the same origin
//
// "Origin" is the (scheme, host, port) triple. Url::origin() already
// applies default ports (80 for http, 443 for https), so
// http://example.com and http://example.com:80 compare as equal.
//
// Links that fail this test are discovered but never crawled. This also
// quietly rejects mailto:, javascript:, etc. - their origins are opaque
// and never equal to an http(s) origin.
pub fn same_origin(a: &Url, b: &Url) -> bool {
    a.origin() == b.origin()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn parse_absolute_accepts_valid_url() {
        let parsed = parse_absolute("https://example.com/page").unwrap();
        assert_eq!(parsed.as_str(), "https://example.com/page");
    }

    #[test]
    fn parse_absolute_rejects_relative_reference() {
        let err = parse_absolute("/just/a/path").unwrap_err();
        assert!(err.to_string().contains("/just/a/path"));
    }

    #[test]
    fn resolve_absolute_href() {
        let base = url("https://example.com/page");
        let resolved = resolve("https://other.com", &base).unwrap();
        assert_eq!(resolved.as_str(), "https://other.com/");
    }

    #[test]
    fn resolve_root_relative_href() {
        let base = url("https://example.com/page");
        let resolved = resolve("/docs", &base).unwrap();
        assert_eq!(resolved.as_str(), "https://example.com/docs");
    }

    #[test]
    fn resolve_dot_segments() {
        let base = url("https://example.com/a/b/page");
        let resolved = resolve("../other", &base).unwrap();
        assert_eq!(resolved.as_str(), "https://example.com/a/other");
    }

    #[test]
    fn resolve_scheme_relative_href() {
        let base = url("https://example.com/page");
        let resolved = resolve("//cdn.example.com/lib.js", &base).unwrap();
        assert_eq!(resolved.as_str(), "https://cdn.example.com/lib.js");
    }

    #[test]
    fn resolve_preserves_fragment_and_query() {
        let base = url("https://example.com/page");
        let resolved = resolve("/docs?v=2#intro", &base).unwrap();
        assert_eq!(resolved.as_str(), "https://example.com/docs?v=2#intro");
    }

    #[test]
    fn resolve_malformed_href_fails() {
        let base = url("https://example.com/page");
        // An unclosed IPv6 bracket can't be parsed even as a relative path
        assert!(resolve("http://[::1", &base).is_err());
    }

    #[test]
    fn same_origin_matches_same_site() {
        assert!(same_origin(
            &url("https://example.com/a"),
            &url("https://example.com/b?q=1")
        ));
    }

    #[test]
    fn same_origin_applies_default_ports() {
        assert!(same_origin(
            &url("http://example.com:80/a"),
            &url("http://example.com/b")
        ));
        assert!(same_origin(
            &url("https://example.com:443/a"),
            &url("https://example.com/b")
        ));
    }

    #[test]
    fn different_host_is_different_origin() {
        assert!(!same_origin(
            &url("https://example.com"),
            &url("https://external.com")
        ));
    }

    #[test]
    fn different_scheme_is_different_origin() {
        assert!(!same_origin(
            &url("http://example.com"),
            &url("https://example.com")
        ));
    }

    #[test]
    fn different_port_is_different_origin() {
        assert!(!same_origin(
            &url("https://example.com:8080"),
            &url("https://example.com")
        ));
    }

    #[test]
    fn mailto_is_never_same_origin() {
        let base = url("https://example.com/page");
        let resolved = resolve("mailto:test@example.com", &base).unwrap();
        assert!(!same_origin(&resolved, &base));
    }
}
