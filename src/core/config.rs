//! # Configuration
//!
//! Centralizes settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.liftoff/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover the options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::graphql::client::DEFAULT_ENDPOINT;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LiftoffConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub limit: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub endpoint: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LIMIT: u32 = 10;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub limit: u32,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.liftoff/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".liftoff").join("config.toml"))
}

/// Load config from `~/.liftoff/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LiftoffConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LiftoffConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LiftoffConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(LiftoffConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: LiftoffConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Liftoff Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# limit = 10                           # Past launches to request per session

# [api]
# endpoint = "https://spacex-production.up.railway.app/"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env → CLI.
///
/// `cli_endpoint` and `cli_limit` come from CLI flags (None = not specified).
pub fn resolve(
    config: &LiftoffConfig,
    cli_endpoint: Option<&str>,
    cli_limit: Option<u32>,
) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let endpoint = cli_endpoint
        .map(|s| s.to_string())
        .or_else(|| std::env::var("LIFTOFF_ENDPOINT").ok())
        .or_else(|| config.api.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    // Limit: CLI → env → config → default
    let limit = cli_limit
        .or_else(|| env_limit())
        .or(config.general.limit)
        .unwrap_or(DEFAULT_LIMIT);

    ResolvedConfig { endpoint, limit }
}

/// Reads `LIFTOFF_LIMIT`, warning (rather than failing) on a non-numeric value.
fn env_limit() -> Option<u32> {
    let raw = std::env::var("LIFTOFF_LIMIT").ok()?;
    match raw.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            warn!("Ignoring non-numeric LIFTOFF_LIMIT: {raw}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = LiftoffConfig::default();
        assert!(config.general.limit.is_none());
        assert!(config.api.endpoint.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = LiftoffConfig::default();
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(resolved.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = LiftoffConfig {
            general: GeneralConfig { limit: Some(25) },
            api: ApiConfig {
                endpoint: Some("http://localhost:4000/".to_string()),
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.endpoint, "http://localhost:4000/");
        assert_eq!(resolved.limit, 25);
    }

    #[test]
    fn test_resolve_cli_wins_over_config() {
        let config = LiftoffConfig {
            general: GeneralConfig { limit: Some(25) },
            api: ApiConfig {
                endpoint: Some("http://localhost:4000/".to_string()),
            },
        };
        let resolved = resolve(&config, Some("http://cli:4000/"), Some(3));
        assert_eq!(resolved.endpoint, "http://cli:4000/");
        assert_eq!(resolved.limit, 3);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
limit = 5

[api]
endpoint = "http://192.168.1.100:4000/"
"#;
        let config: LiftoffConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.limit, Some(5));
        assert_eq!(
            config.api.endpoint.as_deref(),
            Some("http://192.168.1.100:4000/")
        );
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
limit = 3
"#;
        let config: LiftoffConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.limit, Some(3));
        assert!(config.api.endpoint.is_none());
    }
}
