use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/soq/config.toml`.
///
/// Supplies CLI defaults only; `query_url::build_query_url` never reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoqConfig {
    /// Default endpoint base URL, used when `--endpoint` is omitted.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Row limit used when `--limit` is omitted. 1000 matches the
    /// server-side default page size of Socrata endpoints.
    #[serde(default = "default_limit")]
    pub default_limit: u64,
    /// Whole-transfer timeout in seconds for `soq fetch`.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_limit() -> u64 {
    1000
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for SoqConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            default_limit: default_limit(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("soq")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SoqConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SoqConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SoqConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = SoqConfig::default();
        assert!(cfg.endpoint.is_none());
        assert_eq!(cfg.default_limit, 1000);
        assert_eq!(cfg.timeout_secs, 30);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SoqConfig {
            endpoint: Some("https://data.example.org/resource/abcd-1234.json".to_string()),
            default_limit: 50,
            timeout_secs: 10,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: SoqConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.endpoint, cfg.endpoint);
        assert_eq!(parsed.default_limit, cfg.default_limit);
        assert_eq!(parsed.timeout_secs, cfg.timeout_secs);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let parsed: SoqConfig = toml::from_str("").unwrap();
        assert!(parsed.endpoint.is_none());
        assert_eq!(parsed.default_limit, 1000);
        assert_eq!(parsed.timeout_secs, 30);
    }
}
