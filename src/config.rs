//! Configuration loading.
//!
//! Sources are merged in order, later ones winning:
//!
//! 1. Built-in defaults ([`Config::default`])
//! 2. An optional TOML file
//! 3. Environment variables prefixed `PARTS_`, with `__` between nested keys
//!    (e.g. `PARTS_SERVER__BIND=127.0.0.1:9000`, `PARTS_INVENTORY__SEED_DEMO_CATALOG=true`)
//!
//! ```toml
//! [server]
//! bind = "0.0.0.0:8000"
//! allowed_origins = ["http://localhost:3000"]
//!
//! [inventory]
//! buffer_size = 32
//! default_min_stock_level = 20
//! seed_demo_catalog = false
//!
//! [telemetry]
//! log_level = "info"
//! log_format = "compact"
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: String,
    /// Origins allowed by CORS. Empty disables cross-origin access.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8000".to_string(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Capacity of the part actor's request channel.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
    /// Threshold applied when a create request omits `min_stock_level`.
    #[serde(default = "default_min_stock_level")]
    pub default_min_stock_level: i64,
    #[serde(default)]
    pub seed_demo_catalog: bool,
}

fn default_buffer_size() -> usize {
    32
}

fn default_min_stock_level() -> i64 {
    20
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
            default_min_stock_level: default_min_stock_level(),
            seed_demo_catalog: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub inventory: InventoryConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl Config {
    /// Loads defaults, then `path` (if given), then `PARTS_*` environment variables.
    ///
    /// A `path` that does not exist is an error; omit it to run on defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::Invalid(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            figment = figment.merge(Toml::file(path));
        }
        let config: Config = figment.merge(Env::prefixed("PARTS_").split("__")).extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inventory.buffer_size == 0 {
            return Err(ConfigError::Invalid(
                "inventory.buffer_size must be greater than zero".into(),
            ));
        }
        if self.inventory.default_min_stock_level < 0 {
            return Err(ConfigError::Invalid(format!(
                "inventory.default_min_stock_level must not be negative (got {})",
                self.inventory.default_min_stock_level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_file() {
        Jail::expect_with(|_jail| {
            let config = Config::load(None).expect("defaults load");
            assert_eq!(config, Config::default());
            assert_eq!(config.server.bind, "0.0.0.0:8000");
            assert_eq!(config.inventory.default_min_stock_level, 20);
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "parts.toml",
                r#"
                [server]
                bind = "127.0.0.1:9000"
                allowed_origins = []

                [inventory]
                seed_demo_catalog = true
                default_min_stock_level = 5

                [telemetry]
                log_format = "json"
                "#,
            )?;
            jail.set_env("PARTS_INVENTORY__BUFFER_SIZE", "64");
            jail.set_env("PARTS_SERVER__BIND", "127.0.0.1:9100");

            let config = Config::load(Some(Path::new("parts.toml"))).expect("config loads");
            assert_eq!(config.server.bind, "127.0.0.1:9100");
            assert!(config.server.allowed_origins.is_empty());
            assert!(config.inventory.seed_demo_catalog);
            assert_eq!(config.inventory.default_min_stock_level, 5);
            assert_eq!(config.inventory.buffer_size, 64);
            assert_eq!(config.telemetry.log_format, LogFormat::Json);
            assert_eq!(config.telemetry.log_level, "info");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("PARTS_INVENTORY__BUFFER_SIZE", "0");
            let err = Config::load(None).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)));
            Ok(())
        });

        Jail::expect_with(|jail| {
            jail.set_env("PARTS_INVENTORY__DEFAULT_MIN_STOCK_LEVEL", "-1");
            let err = Config::load(None).unwrap_err();
            assert!(err.to_string().contains("default_min_stock_level"));
            Ok(())
        });
    }

    #[test]
    fn test_missing_file_is_an_error() {
        Jail::expect_with(|_jail| {
            let err = Config::load(Some(Path::new("absent.toml"))).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)));
            Ok(())
        });
    }
}
