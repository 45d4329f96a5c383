//! HTTP GET for built query URLs.
//!
//! Uses the curl crate (libcurl) to issue the request and collect the
//! response body. The URL builder stays pure; this is the collaborator
//! that actually talks to the endpoint.

use std::string::FromUtf8Error;
use std::time::Duration;

use thiserror::Error;

use crate::endpoint;

/// Connect timeout applied to every request.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Failure modes of a single GET. Kept as a typed enum so callers can
/// distinguish transport errors from HTTP status errors before converting
/// to anyhow at the CLI seam.
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL does not parse as http(s); curl would accept some of these
    /// (e.g. `file://`), so we reject them up front.
    #[error("not an http(s) URL: {0}")]
    NotHttp(String),
    /// Curl reported an error (timeout, DNS, connection, TLS, etc.).
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("endpoint returned HTTP {0}")]
    Http(u32),
    /// Response body was not valid UTF-8.
    #[error("response body is not valid UTF-8")]
    Body(#[from] FromUtf8Error),
}

/// Performs a GET of `url` and returns the response body as text.
///
/// Follows redirects. `timeout_secs` bounds the whole transfer; the connect
/// timeout is fixed at 15s. Runs in the current thread.
pub fn fetch_body(url: &str, timeout_secs: u64) -> Result<String, FetchError> {
    if !endpoint::is_http_url(url) {
        return Err(FetchError::NotHttp(url.to_string()));
    }

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.connect_timeout(CONNECT_TIMEOUT)?;
    easy.timeout(Duration::from_secs(timeout_secs))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }

    tracing::debug!(
        host = endpoint::endpoint_host(url).as_deref().unwrap_or("?"),
        bytes = body.len(),
        "GET ok"
    );

    Ok(String::from_utf8(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_http_url() {
        match fetch_body("ftp://example.org/x", 30) {
            Err(FetchError::NotHttp(u)) => assert_eq!(u, "ftp://example.org/x"),
            other => panic!("expected NotHttp, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn rejects_unparseable_url() {
        assert!(matches!(
            fetch_body("no scheme at all", 30),
            Err(FetchError::NotHttp(_))
        ));
    }

    #[test]
    fn http_error_display() {
        assert_eq!(FetchError::Http(404).to_string(), "endpoint returned HTTP 404");
    }
}
