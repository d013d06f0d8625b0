//! pdns-socket-backend Domain Layer
pub mod backend_reply;
pub mod backend_request;
pub mod config;
pub mod errors;

pub use backend_reply::{BackendReply, LookupRecord, ReplyResult, DEFAULT_RECORD_TTL};
pub use backend_request::{BackendMethod, BackendRequest, MetadataKind, RequestParameters};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
