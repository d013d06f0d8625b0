use async_trait::async_trait;
use pdns_backend_domain::DomainError;

/// Source of answer content for `lookup`.
///
/// Implementations backed by a fixed table never fail and return an empty
/// string for unknown names. Implementations backed by a live store may fail
/// or block; callers treat an error as "no answer".
#[async_trait]
pub trait RecordResolver: Send + Sync {
    async fn resolve(&self, qname: &str) -> Result<String, DomainError>;
}
