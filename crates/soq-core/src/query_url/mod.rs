//! SoQL query URL construction.
//!
//! Assembles a `$query=` GET URL for a tabular open-data endpoint from an
//! endpoint base, a SoQL fragment, and a row limit, then percent-encodes
//! spaces and newlines.

mod encode;

pub use encode::encode_spaces_and_newlines;

/// Builds the GET URL for a SoQL query against a tabular-data endpoint.
///
/// The assembled form is
/// `{endpoint_base}?$query={query_fragment}%20limit {row_limit}`, after
/// which every space and newline anywhere in the string (the `limit`
/// clause's own separator included, plus any carried in by the inputs) is
/// replaced with `%20`.
///
/// Only space and newline are encoded. Characters like `&`, `#`, `%`, and
/// non-ASCII pass through untouched; consumers rely on that exact partial
/// encoding, so do not route this through a full URL encoder.
///
/// Neither input is validated or parsed. The function is pure and does no
/// I/O; issuing the request is [`crate::fetch`]'s job.
///
/// # Examples
///
/// ```
/// use soq_core::query_url::build_query_url;
///
/// assert_eq!(
///     build_query_url("https://example.org/resource", "SELECT *", 10),
///     "https://example.org/resource?$query=SELECT%20*%20limit%2010"
/// );
/// ```
pub fn build_query_url(endpoint_base: &str, query_fragment: &str, row_limit: u64) -> String {
    let raw = format!("{endpoint_base}?$query={query_fragment}%20limit {row_limit}");
    encode_spaces_and_newlines(&raw)
}
