pub mod calculate_soa_serial;
pub mod get_domain_metadata;
pub mod handle_backend_request;
pub mod initialize;
pub mod lookup;

pub use calculate_soa_serial::CalculateSoaSerialUseCase;
pub use get_domain_metadata::GetDomainMetadataUseCase;
pub use handle_backend_request::HandleBackendRequestUseCase;
pub use initialize::InitializeUseCase;
pub use lookup::LookupUseCase;
