pub mod errors;
pub mod logging;
pub mod protocol;
pub mod records;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use protocol::ProtocolConfig;
pub use records::RecordsConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
