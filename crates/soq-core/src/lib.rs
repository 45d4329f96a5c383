pub mod config;
pub mod logging;

pub mod endpoint;
pub mod fetch;
pub mod query_url;
