use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::protocol::ProtocolConfig;
use super::records::RecordsConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "pdns-backend.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/pdns-backend/config.toml";

/// Main configuration structure for the backend
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (socket path)
    #[serde(default)]
    pub server: ServerConfig,

    /// Wire protocol behaviour
    #[serde(default)]
    pub protocol: ProtocolConfig,

    /// Static record table
    #[serde(default)]
    pub records: RecordsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. pdns-backend.toml in current directory
    /// 3. /etc/pdns-backend/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(socket_path) = overrides.socket_path {
            self.server.socket_path = socket_path;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(file) = overrides.log_file {
            self.logging.file = Some(file);
        }
        if overrides.log_stderr {
            self.logging.file = None;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.socket_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Socket path cannot be empty".to_string(),
            ));
        }

        if self.protocol.max_frame_size == 0 {
            return Err(ConfigError::Validation(
                "max_frame_size must be greater than 0".to_string(),
            ));
        }

        if self.records.default_ttl == 0 {
            return Err(ConfigError::Validation(
                "Record TTL cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub socket_path: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
    pub log_stderr: bool,
}
