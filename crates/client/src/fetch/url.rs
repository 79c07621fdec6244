//! Scheme checks for asset URLs.

/// Schemes the fetcher will request.
const HTTP_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Whether `url` is an absolute http(s) URL.
///
/// Matches on the literal prefix, so the check is case-sensitive: relative
/// routes such as `/library/rust.svg` or `HTTPS://...` are not fetched.
pub fn has_http_scheme(url: &str) -> bool {
    HTTP_PREFIXES.iter().any(|prefix| url.starts_with(prefix))
}
