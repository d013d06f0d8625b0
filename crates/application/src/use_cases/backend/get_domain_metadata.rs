use pdns_backend_domain::{BackendReply, BackendRequest, DomainError, MetadataKind};

#[derive(Debug, Default, Clone, Copy)]
pub struct GetDomainMetadataUseCase;

impl GetDomainMetadataUseCase {
    pub fn new() -> Self {
        Self
    }

    /// `PRESIGNED` and `SOA-EDIT` are recognised and carry no values.
    pub fn execute(&self, request: &BackendRequest) -> Result<BackendReply, DomainError> {
        match request.metadata_kind() {
            MetadataKind::Presigned | MetadataKind::SoaEdit => Ok(BackendReply::metadata(vec![])),
            MetadataKind::Unsupported(kind) => Err(DomainError::UnsupportedMetadataKind(kind)),
        }
    }
}
