//! Url command: build the query URL and print it.

use soq_core::query_url;

/// Build and print the query URL without issuing any request.
pub fn run_url(endpoint: &str, query: &str, limit: u64) {
    println!("{}", query_url::build_query_url(endpoint, query, limit));
}
