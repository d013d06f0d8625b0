use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::backend_reply::DEFAULT_RECORD_TTL;

/// Static name -> content table served by `lookup`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordsConfig {
    #[serde(default = "default_ttl")]
    pub default_ttl: u32,

    #[serde(default = "default_entries")]
    pub entries: HashMap<String, String>,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            default_ttl: default_ttl(),
            entries: default_entries(),
        }
    }
}

fn default_ttl() -> u32 {
    DEFAULT_RECORD_TTL
}

fn default_entries() -> HashMap<String, String> {
    [
        ("foo.example.com", "192.50.100.1"),
        ("bar.example.com", "192.50.100.2"),
        ("baz.example.com", "192.50.100.3"),
    ]
    .into_iter()
    .map(|(name, content)| (name.to_string(), content.to_string()))
    .collect()
}
