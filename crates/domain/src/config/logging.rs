use serde::{Deserialize, Serialize};

pub const DEFAULT_LOG_FILE: &str = "/var/log/pdns/pdnsdomainsocketbackend.log";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Opened in append mode. `None` logs to stderr.
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> Option<String> {
    Some(DEFAULT_LOG_FILE.to_string())
}
