use pdns_backend_domain::BackendReply;
use std::sync::Arc;
use tracing::debug;

use crate::services::SerialGenerator;

pub struct CalculateSoaSerialUseCase {
    serials: Arc<SerialGenerator>,
}

impl CalculateSoaSerialUseCase {
    pub fn new(serials: Arc<SerialGenerator>) -> Self {
        Self { serials }
    }

    pub fn execute(&self) -> BackendReply {
        let serial = self.serials.next();
        debug!(serial, "SOA serial issued");
        BackendReply::serial(serial)
    }
}
