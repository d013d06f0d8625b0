use serde::{Deserialize, Serialize};

pub const DEFAULT_SOCKET_PATH: &str = "/var/run/pdns/pdnsbackend.sock";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_socket_path")]
    pub socket_path: String,

    /// Unlink a leftover socket file before binding.
    #[serde(default = "default_true")]
    pub remove_stale_socket: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            socket_path: default_socket_path(),
            remove_stale_socket: true,
        }
    }
}

fn default_socket_path() -> String {
    DEFAULT_SOCKET_PATH.to_string()
}

fn default_true() -> bool {
    true
}
