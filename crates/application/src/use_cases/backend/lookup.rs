use pdns_backend_domain::{BackendReply, BackendRequest, LookupRecord, DEFAULT_RECORD_TTL};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::ports::RecordResolver;

pub struct LookupUseCase {
    resolver: Arc<dyn RecordResolver>,
    ttl: u32,
}

impl LookupUseCase {
    pub fn new(resolver: Arc<dyn RecordResolver>) -> Self {
        Self {
            resolver,
            ttl: DEFAULT_RECORD_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    /// Emits exactly one record echoing `qtype`/`qname`. Unknown names and
    /// resolver failures both produce empty content.
    #[instrument(skip(self, request), fields(qname = request.qname(), qtype = request.qtype()))]
    pub async fn execute(&self, request: &BackendRequest) -> BackendReply {
        let qname = request.qname();

        let content = match self.resolver.resolve(qname).await {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "Record resolver failed, answering with empty content");
                String::new()
            }
        };

        debug!(content = %content, ttl = self.ttl, "Lookup answered");

        BackendReply::records(vec![LookupRecord::new(
            request.qtype(),
            qname,
            content,
            self.ttl,
        )])
    }
}
