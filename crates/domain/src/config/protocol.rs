use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProtocolConfig {
    /// Upper bound for buffered bytes of a single request that has not
    /// completed yet.
    #[serde(default = "default_max_frame_size")]
    pub max_frame_size: usize,

    /// Terminate every reply with `\n`.
    #[serde(default = "default_true")]
    pub line_terminated: bool,

    /// Answer unsupported methods and metadata kinds with `{"result":false}`
    /// instead of writing nothing.
    #[serde(default)]
    pub reply_on_unsupported: bool,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            max_frame_size: default_max_frame_size(),
            line_terminated: true,
            reply_on_unsupported: false,
        }
    }
}

fn default_max_frame_size() -> usize {
    64 * 1024
}

fn default_true() -> bool {
    true
}
