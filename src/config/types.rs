//! Process configuration: deployment label, store location, HTTP listener.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ENV: &str = "dev";
pub const DEFAULT_ADDRESS: &str = "localhost:8082";
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 5;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_env")]
    pub env: String,
    /// SQLite database file. Created on first start if missing.
    pub storage_path: PathBuf,
    #[serde(default)]
    pub http_server: HttpServer,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HttpServer {
    /// `host:port` to bind.
    #[serde(default = "default_address")]
    pub address: String,
    /// How long in-flight requests may drain after a shutdown signal.
    #[serde(default = "default_shutdown_timeout_secs")]
    pub shutdown_timeout_secs: u64,
}

impl Default for HttpServer {
    fn default() -> Self {
        Self {
            address: default_address(),
            shutdown_timeout_secs: default_shutdown_timeout_secs(),
        }
    }
}

impl HttpServer {
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

fn default_env() -> String {
    DEFAULT_ENV.to_string()
}

fn default_address() -> String {
    DEFAULT_ADDRESS.to_string()
}

fn default_shutdown_timeout_secs() -> u64 {
    DEFAULT_SHUTDOWN_TIMEOUT_SECS
}
