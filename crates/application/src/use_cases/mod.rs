pub mod backend;

pub use backend::{
    CalculateSoaSerialUseCase, GetDomainMetadataUseCase, HandleBackendRequestUseCase,
    InitializeUseCase, LookupUseCase,
};
