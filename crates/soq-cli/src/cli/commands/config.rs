//! Config command: show config file path and current values.

use anyhow::Result;
use soq_core::config::{self, SoqConfig};

/// Print the config file location and the effective settings.
pub fn run_config(cfg: &SoqConfig) -> Result<()> {
    println!("config file: {}", config::config_path()?.display());
    match &cfg.endpoint {
        Some(e) => println!("endpoint:      {e}"),
        None => println!("endpoint:      (unset)"),
    }
    println!("default_limit: {}", cfg.default_limit);
    println!("timeout_secs:  {}", cfg.timeout_secs);
    Ok(())
}
