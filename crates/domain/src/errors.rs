use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),

    #[error("Unsupported kind for getDomainMetadata: {0}")]
    UnsupportedMetadataKind(String),

    #[error("Record resolver unavailable: {0}")]
    ResolverUnavailable(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    /// Dispatch misses are answered with silence (or an explicit `false`),
    /// never by closing the connection.
    pub fn is_dispatch_miss(&self) -> bool {
        matches!(
            self,
            DomainError::UnsupportedMethod(_) | DomainError::UnsupportedMetadataKind(_)
        )
    }
}
