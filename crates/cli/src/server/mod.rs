pub mod backend;

pub use backend::start_backend_server;
