//! Endpoint URL inspection.
//!
//! Small helpers over the `url` crate used by the CLI and fetch path:
//! the builder itself never parses its inputs, but before issuing a GET
//! we want to know the host (for log fields) and that the scheme is
//! actually http(s).

/// Extracts the host of an endpoint URL for use in log fields.
///
/// Returns `None` if the URL cannot be parsed or has no host.
pub fn endpoint_host(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    parsed.host_str().map(|h| h.to_string())
}

/// True if the URL parses and its scheme is `http` or `https`.
pub fn is_http_url(url: &str) -> bool {
    match url::Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_normal() {
        assert_eq!(
            endpoint_host("https://data.cityofnewyork.us/resource/erm2-nwe9.json").as_deref(),
            Some("data.cityofnewyork.us")
        );
    }

    #[test]
    fn host_unparseable() {
        assert_eq!(endpoint_host("not a url"), None);
        assert_eq!(endpoint_host(""), None);
    }

    #[test]
    fn http_schemes() {
        assert!(is_http_url("https://example.org/resource"));
        assert!(is_http_url("http://example.org/resource"));
        assert!(!is_http_url("ftp://example.org/resource"));
        assert!(!is_http_url("resource"));
    }
}
