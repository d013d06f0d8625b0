pub mod codec;
pub mod connection;
pub mod listener;

pub use codec::{BackendCodec, InboundFrame};
pub use connection::ConnectionHandler;
pub use listener::BackendListener;
