//! Configuration management for the registry.
//!
//! Provides the runtime configuration shared by the CLI commands: where the
//! farm store lives on disk and where the REST backend binds. Fixed import
//! policy (allow-list, thresholds) lives in [`crate::constants`], not here.

use crate::constants::{DEFAULT_DB_FILE, DEFAULT_HOST, DEFAULT_PORT};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime configuration for the wind farm registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Host address the REST backend binds to
    pub host: String,

    /// Port the REST backend binds to
    pub port: u16,

    /// Path to the SQLite database file
    pub database_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_path: default_database_path(),
        }
    }
}

impl Config {
    /// Create configuration with a custom bind host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Create configuration with a custom bind port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Create configuration with a custom database path
    pub fn with_database_path(mut self, path: PathBuf) -> Self {
        self.database_path = path;
        self
    }

    /// Socket address string for the REST backend
    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

/// Default database location under the platform data directory
///
/// Falls back to the current directory when no platform data directory is
/// available (e.g., stripped-down containers).
pub fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("windfarm-registry").join(DEFAULT_DB_FILE))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_builder_methods() {
        let config = Config::default()
            .with_host("0.0.0.0")
            .with_port(8080)
            .with_database_path(PathBuf::from("/tmp/test.db"));

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_path, PathBuf::from("/tmp/test.db"));
    }
}
