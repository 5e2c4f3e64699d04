//! Server settings.
//!
//! Everything is read from `MCP_*` environment variables, after loading a
//! `.env` file when one exists. Unset variables keep the defaults below.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::{Error, Result};
use super::transport::Transport;

/// All settings the server runs with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub transport: Transport,
    pub dice: DiceConfig,
}

/// Identity reported in the initialize reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// `MCP_SERVER_NAME`, default `dice`.
    pub name: String,
    /// Always the crate version.
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "dice".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Stderr log output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `MCP_LOG_LEVEL`: an `EnvFilter` directive such as `debug` or
    /// `dice_mcp_server=trace`.
    pub level: String,
    /// `MCP_LOG_TIMESTAMPS`; `false` or `0` turns timestamps off.
    pub with_timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_timestamps: true,
        }
    }
}

/// Configuration for the randomness source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceConfig {
    /// `MCP_DICE_SEED`. `None` uses the thread-local RNG.
    pub seed: Option<u64>,
}

impl Config {
    /// Build the configuration from the process environment.
    ///
    /// Fails only on values that are present but unusable, such as a seed
    /// that is not an unsigned integer.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }

        let mut config = Self::default();

        if let Some(name) = non_blank("MCP_SERVER_NAME") {
            config.server.name = name;
        }
        if let Some(level) = non_blank("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(flag) = non_blank("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps =
                !matches!(flag.to_lowercase().as_str(), "false" | "0");
        }

        config.transport = Transport::from_env()?;

        if let Some(seed) = non_blank("MCP_DICE_SEED") {
            let seed = seed.parse::<u64>().map_err(|e| {
                Error::config(format!("MCP_DICE_SEED must be an unsigned integer: {}", e))
            })?;
            info!("Dice seed loaded from environment");
            config.dice.seed = Some(seed);
        }

        Ok(config)
    }
}

/// Trimmed value of `key`, treating unset and blank alike.
fn non_blank(key: &str) -> Option<String> {
    let value = std::env::var(key).ok()?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::env_lock;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.name, "dice");
        assert_eq!(config.server.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.dice.seed, None);
    }

    #[test]
    fn test_seed_from_env() {
        let _lock = env_lock();
        unsafe {
            std::env::set_var("MCP_DICE_SEED", " 1234 ");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.dice.seed, Some(1234));
        unsafe {
            std::env::remove_var("MCP_DICE_SEED");
        }
    }

    #[test]
    fn test_invalid_seed_is_config_error() {
        let _lock = env_lock();
        unsafe {
            std::env::set_var("MCP_DICE_SEED", "lucky");
        }
        let result = Config::from_env();
        unsafe {
            std::env::remove_var("MCP_DICE_SEED");
        }
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_seed_absent_by_default() {
        let _lock = env_lock();
        unsafe {
            std::env::remove_var("MCP_DICE_SEED");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.dice.seed, None);
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = env_lock();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "tabletop");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.server.name, "tabletop");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }

    #[test]
    fn test_timestamps_flag() {
        let _lock = env_lock();
        unsafe {
            std::env::set_var("MCP_LOG_TIMESTAMPS", "FALSE");
            std::env::set_var("MCP_LOG_LEVEL", "debug");
        }
        let config = Config::from_env();
        unsafe {
            std::env::remove_var("MCP_LOG_TIMESTAMPS");
            std::env::remove_var("MCP_LOG_LEVEL");
        }
        let config = config.unwrap();
        assert!(!config.logging.with_timestamps);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_transport_loaded_with_config() {
        let _lock = env_lock();
        unsafe {
            std::env::set_var("MCP_TRANSPORT", "Stdio");
        }
        let config = Config::from_env();
        unsafe {
            std::env::remove_var("MCP_TRANSPORT");
        }
        assert_eq!(config.unwrap().transport, Transport::Stdio);
    }

    #[test]
    fn test_config_serializes() {
        let value = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(value["server"]["name"], "dice");
        assert_eq!(value["transport"]["kind"], "stdio");
        assert!(value["dice"]["seed"].is_null());
    }
}
