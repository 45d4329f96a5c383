//! Fetch command: build the query URL, GET it, print the body.

use anyhow::{Context, Result};
use soq_core::{endpoint, fetch, query_url};

/// Build the URL, issue the GET, and print the response body to stdout.
pub fn run_fetch(endpoint_base: &str, query: &str, limit: u64, timeout_secs: u64) -> Result<()> {
    let url = query_url::build_query_url(endpoint_base, query, limit);
    tracing::info!(
        host = endpoint::endpoint_host(endpoint_base).as_deref().unwrap_or("?"),
        limit,
        "fetching query"
    );

    let body = fetch::fetch_body(&url, timeout_secs).with_context(|| format!("GET {url}"))?;
    println!("{body}");
    Ok(())
}
