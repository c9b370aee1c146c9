//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Default name reported to clients.
pub const DEFAULT_SERVER_NAME: &str = "wireviz-mcp-server";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Diagram engine (WireViz) configuration.
    pub engine: EngineConfig,

    /// Security and path validation configuration.
    pub security: SecurityConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the external diagram engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Executable invoked to render harness descriptions.
    pub binary: String,

    /// Upper bound on a single engine invocation, in seconds.
    pub timeout_secs: u64,
}

/// Configuration for security and path validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Optional root directory that files written by the export tools must
    /// live under. If None, no path restrictions are enforced.
    pub root_path: Option<PathBuf>,

    /// Whether an existing symlink may be used as an output path.
    pub allow_symlinks: bool,
}

impl EngineConfig {
    /// The configured timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            binary: "wireviz".to_string(),
            timeout_secs: 60,
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            root_path: None,
            allow_symlinks: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: DEFAULT_SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            engine: EngineConfig::default(),
            security: SecurityConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_WIREVIZ_BIN`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        if let Ok(binary) = std::env::var("MCP_WIREVIZ_BIN") {
            config.engine.binary = binary;
        }

        if let Ok(timeout) = std::env::var("MCP_WIREVIZ_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.engine.timeout_secs = secs,
                Err(_) => warn!(
                    "Ignoring invalid MCP_WIREVIZ_TIMEOUT_SECS={:?}, keeping {}s",
                    timeout, config.engine.timeout_secs
                ),
            }
        }

        if let Ok(root_path) = std::env::var("MCP_ROOT_PATH") {
            config.security.root_path = Some(PathBuf::from(root_path));
            info!(
                "Output path restriction enabled: root directory set to {:?}",
                config.security.root_path
            );
        }

        if let Ok(allow_symlinks) = std::env::var("MCP_ALLOW_SYMLINKS") {
            config.security.allow_symlinks = allow_symlinks.parse().unwrap_or(true);
        }

        config
    }

    /// Check values that cannot be expressed through types alone.
    pub fn validate(&self) -> Result<()> {
        if self.server.name.trim().is_empty() {
            return Err(Error::config("server name must not be empty"));
        }
        if self.engine.binary.trim().is_empty() {
            return Err(Error::config("MCP_WIREVIZ_BIN must not be empty"));
        }
        if self.engine.timeout_secs == 0 {
            return Err(Error::config("MCP_WIREVIZ_TIMEOUT_SECS must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests touching them.
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.server.name, DEFAULT_SERVER_NAME);
        assert_eq!(config.engine.binary, "wireviz");
        assert_eq!(config.engine.timeout(), Duration::from_secs(60));
        assert!(config.security.root_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_engine_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_WIREVIZ_BIN", "/opt/wireviz/bin/wireviz");
            std::env::set_var("MCP_WIREVIZ_TIMEOUT_SECS", "15");
        }
        let config = Config::from_env();
        assert_eq!(config.engine.binary, "/opt/wireviz/bin/wireviz");
        assert_eq!(config.engine.timeout_secs, 15);
        unsafe {
            std::env::remove_var("MCP_WIREVIZ_BIN");
            std::env::remove_var("MCP_WIREVIZ_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_invalid_timeout_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_WIREVIZ_TIMEOUT_SECS", "soon");
        }
        let config = Config::from_env();
        assert_eq!(config.engine.timeout_secs, 60);
        unsafe {
            std::env::remove_var("MCP_WIREVIZ_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.engine.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_blank_binary() {
        let mut config = Config::default();
        config.engine.binary = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
