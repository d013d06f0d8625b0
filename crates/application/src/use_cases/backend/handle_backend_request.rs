use pdns_backend_domain::{BackendMethod, BackendReply, BackendRequest, DomainError};
use std::sync::Arc;
use tracing::debug;

use super::{
    CalculateSoaSerialUseCase, GetDomainMetadataUseCase, InitializeUseCase, LookupUseCase,
};
use crate::ports::RecordResolver;
use crate::services::SerialGenerator;

/// Routes a decoded request to the use case for its method.
///
/// Unsupported methods and metadata kinds come back as
/// `DomainError::UnsupportedMethod` / `UnsupportedMetadataKind`; the caller
/// decides whether that means silence or an explicit `false`.
pub struct HandleBackendRequestUseCase {
    initialize: InitializeUseCase,
    lookup: LookupUseCase,
    get_domain_metadata: GetDomainMetadataUseCase,
    calculate_soa_serial: CalculateSoaSerialUseCase,
}

impl HandleBackendRequestUseCase {
    pub fn new(resolver: Arc<dyn RecordResolver>, serials: Arc<SerialGenerator>) -> Self {
        Self {
            initialize: InitializeUseCase::new(),
            lookup: LookupUseCase::new(resolver),
            get_domain_metadata: GetDomainMetadataUseCase::new(),
            calculate_soa_serial: CalculateSoaSerialUseCase::new(serials),
        }
    }

    pub fn with_record_ttl(mut self, ttl: u32) -> Self {
        self.lookup = self.lookup.with_ttl(ttl);
        self
    }

    pub async fn execute(&self, request: &BackendRequest) -> Result<BackendReply, DomainError> {
        let method = request.backend_method();
        debug!(method = %method, "Dispatching backend request");

        match method {
            BackendMethod::Initialize => Ok(self.initialize.execute(request)),
            BackendMethod::Lookup => Ok(self.lookup.execute(request).await),
            BackendMethod::GetDomainMetadata => self.get_domain_metadata.execute(request),
            BackendMethod::CalculateSoaSerial => Ok(self.calculate_soa_serial.execute()),
            BackendMethod::Unsupported(name) => Err(DomainError::UnsupportedMethod(name)),
        }
    }
}
