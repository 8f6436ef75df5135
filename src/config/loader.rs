//! Load config from a JSON file (`CONFIG_PATH`) or from environment variables.

use crate::config::{validate, Config, HttpServer, DEFAULT_ENV};
use crate::error::ConfigError;
use std::path::Path;

pub const CONFIG_PATH_VAR: &str = "CONFIG_PATH";
pub const STORAGE_PATH_VAR: &str = "STORAGE_PATH";
pub const HTTP_ADDRESS_VAR: &str = "HTTP_ADDRESS";
pub const APP_ENV_VAR: &str = "APP_ENV";
pub const SHUTDOWN_TIMEOUT_VAR: &str = "SHUTDOWN_TIMEOUT_SECS";

/// Load `.env` if present, then resolve config from the process environment.
pub fn load() -> Result<Config, ConfigError> {
    dotenvy::dotenv().ok();
    load_with(|key| std::env::var(key).ok())
}

/// Resolve config through `lookup`. `CONFIG_PATH` wins over the individual variables.
pub fn load_with<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = match lookup(CONFIG_PATH_VAR).filter(|p| !p.trim().is_empty()) {
        Some(path) => from_file(Path::new(&path))?,
        None => from_vars(&lookup)?,
    };
    validate(&config)?;
    Ok(config)
}

pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Load(format!("cannot read {}: {}", path.display(), e)))?;
    from_json_str(&raw).map_err(|e| match e {
        ConfigError::Load(msg) => ConfigError::Load(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

pub fn from_json_str(raw: &str) -> Result<Config, ConfigError> {
    serde_json::from_str(raw).map_err(|e| ConfigError::Load(e.to_string()))
}

fn from_vars<F>(lookup: &F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let storage_path = lookup(STORAGE_PATH_VAR)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(STORAGE_PATH_VAR))?;
    let mut http_server = HttpServer::default();
    if let Some(address) = lookup(HTTP_ADDRESS_VAR) {
        http_server.address = address;
    }
    if let Some(raw) = lookup(SHUTDOWN_TIMEOUT_VAR) {
        http_server.shutdown_timeout_secs = raw.trim().parse().map_err(|_| ConfigError::Invalid {
            key: SHUTDOWN_TIMEOUT_VAR,
            message: format!("'{}' is not a number of seconds", raw),
        })?;
    }
    Ok(Config {
        env: lookup(APP_ENV_VAR).unwrap_or_else(|| DEFAULT_ENV.into()),
        storage_path: storage_path.into(),
        http_server,
    })
}
