//! CLI command handlers. Each command is in its own file for clarity.

mod config;
mod fetch;
mod url;

pub use config::run_config;
pub use fetch::run_fetch;
pub use url::run_url;
