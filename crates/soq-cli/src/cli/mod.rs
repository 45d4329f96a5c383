//! CLI for the soq query URL tool.

mod commands;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use soq_core::config::{self, SoqConfig};

use commands::{run_config, run_fetch, run_url};

/// Top-level CLI for building and fetching SoQL query URLs.
#[derive(Debug, Parser)]
#[command(name = "soq")]
#[command(about = "soq: build and fetch SoQL query URLs for open-data endpoints", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Build the query URL and print it.
    Url {
        /// SoQL query fragment, e.g. "SELECT * WHERE year = 2024".
        query: String,

        /// Row limit appended as a `limit` clause (default from config).
        #[arg(long, value_name = "N")]
        limit: Option<u64>,

        /// Endpoint base URL (default from config).
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,
    },

    /// Build the query URL, GET it, and print the response body.
    Fetch {
        /// SoQL query fragment.
        query: String,

        /// Row limit appended as a `limit` clause (default from config).
        #[arg(long, value_name = "N")]
        limit: Option<u64>,

        /// Endpoint base URL (default from config).
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,
    },

    /// Show the config file path and current values.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Url {
                query,
                limit,
                endpoint,
            } => {
                let endpoint = resolve_endpoint(endpoint, &cfg)?;
                run_url(&endpoint, &query, limit.unwrap_or(cfg.default_limit));
            }
            CliCommand::Fetch {
                query,
                limit,
                endpoint,
            } => {
                let endpoint = resolve_endpoint(endpoint, &cfg)?;
                run_fetch(
                    &endpoint,
                    &query,
                    limit.unwrap_or(cfg.default_limit),
                    cfg.timeout_secs,
                )?;
            }
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

/// `--endpoint` wins over the configured default; neither present is an error.
fn resolve_endpoint(flag: Option<String>, cfg: &SoqConfig) -> Result<String> {
    match flag.or_else(|| cfg.endpoint.clone()) {
        Some(e) => Ok(e),
        None => bail!("no endpoint given: pass --endpoint or set `endpoint` in config.toml"),
    }
}
