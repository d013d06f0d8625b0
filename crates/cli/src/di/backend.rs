use pdns_backend_application::services::SerialGenerator;
use pdns_backend_application::use_cases::HandleBackendRequestUseCase;
use pdns_backend_domain::Config;
use pdns_backend_infrastructure::backend::ConnectionHandler;
use pdns_backend_infrastructure::records::StaticRecordTable;
use std::sync::Arc;
use tracing::info;

pub struct BackendServices {
    pub connection_handler: Arc<ConnectionHandler>,
}

impl BackendServices {
    pub fn new(config: &Config) -> Self {
        let records = Arc::new(StaticRecordTable::from_config(&config.records));
        info!(
            count = records.len(),
            ttl = config.records.default_ttl,
            "Static record table loaded"
        );

        let serials = Arc::new(SerialGenerator::new());

        let use_case = Arc::new(
            HandleBackendRequestUseCase::new(records, serials)
                .with_record_ttl(config.records.default_ttl),
        );

        let connection_handler = Arc::new(ConnectionHandler::new(
            use_case,
            config.protocol.clone(),
        ));

        Self { connection_handler }
    }
}
