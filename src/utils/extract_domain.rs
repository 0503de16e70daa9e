//! Hostname extraction for display.

use url::Url;

/// Extracts the hostname from a URL string.
///
/// Handles:
/// - Hostnames with ports (e.g., `example.com:3000` → `example.com`)
/// - IPv4 addresses (e.g., `192.168.1.1`)
/// - IPv6 addresses (e.g., `[::1]`)
///
/// Input that cannot be parsed, or that has no host, is returned unchanged.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(extract_domain("https://api.example.com:8080/x"), "api.example.com");
/// assert_eq!(extract_domain("not a url"), "not a url");
/// ```
pub fn extract_domain(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}
