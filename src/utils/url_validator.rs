//! Validation of user-submitted URLs.

use url::Url;

/// Returns true if `candidate` is an absolute `http` or `https` URL.
///
/// Parse failures, relative paths and any other scheme (`ftp:`, `mailto:`,
/// `javascript:` ...) yield `false`. The input is checked as-is; callers are
/// responsible for trimming.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com/a/b"));
/// assert!(!validate_url("/relative/path"));
/// assert!(!validate_url("ftp://example.com"));
/// ```
pub fn validate_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
