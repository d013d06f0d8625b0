use pdns_backend_domain::{BackendReply, BackendRequest};
use tracing::info;

#[derive(Debug, Default, Clone, Copy)]
pub struct InitializeUseCase;

impl InitializeUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Always acknowledges; parameters are informational only.
    pub fn execute(&self, request: &BackendRequest) -> BackendReply {
        info!(
            path = request.parameters.path.as_deref().unwrap_or("-"),
            "Backend initialized by DNS server"
        );
        BackendReply::success()
    }
}
