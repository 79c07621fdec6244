//! Browser-like request headers shared by search and asset requests.
//!
//! The SVGL API replies 304 to requests that do not look like they come
//! from the svgl.app frontend.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, InvalidHeaderValue, ORIGIN, REFERER, USER_AGENT};

pub const ACCEPT_VALUE: &str = "application/json, text/plain, */*";
pub const ORIGIN_VALUE: &str = "https://svgl.app";
pub const REFERER_VALUE: &str = "https://svgl.app/";

/// Build the header set sent with every request.
pub fn browser_headers(user_agent: &str) -> Result<HeaderMap, InvalidHeaderValue> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
    headers.insert(ORIGIN, HeaderValue::from_static(ORIGIN_VALUE));
    headers.insert(REFERER, HeaderValue::from_static(REFERER_VALUE));
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_headers() {
        let headers = browser_headers("Mozilla/5.0 test").unwrap();
        assert_eq!(headers.len(), 4);
        assert_eq!(headers[USER_AGENT], "Mozilla/5.0 test");
        assert_eq!(headers[ACCEPT], "application/json, text/plain, */*");
        assert_eq!(headers[ORIGIN], "https://svgl.app");
        assert_eq!(headers[REFERER], "https://svgl.app/");
    }

    #[test]
    fn test_invalid_user_agent() {
        assert!(browser_headers("bad\nagent").is_err());
    }
}
