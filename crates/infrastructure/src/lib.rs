//! pdns-socket-backend Infrastructure Layer
pub mod backend;
pub mod records;
