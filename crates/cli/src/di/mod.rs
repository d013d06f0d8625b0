mod backend;

pub use backend::BackendServices;
