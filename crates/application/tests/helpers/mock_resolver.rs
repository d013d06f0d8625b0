use async_trait::async_trait;
use pdns_backend_application::ports::RecordResolver;
use pdns_backend_domain::DomainError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MockRecordResolver {
    records: Arc<RwLock<HashMap<String, String>>>,
    should_fail: Arc<RwLock<bool>>,
    calls: Arc<AtomicUsize>,
}

impl MockRecordResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_records(records: Vec<(&str, &str)>) -> Self {
        let resolver = Self::new();
        {
            let mut map = resolver.records.write().await;
            for (name, content) in records {
                map.insert(name.to_string(), content.to_string());
            }
        }
        resolver
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordResolver for MockRecordResolver {
    async fn resolve(&self, qname: &str) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if *self.should_fail.read().await {
            return Err(DomainError::ResolverUnavailable(
                "mock resolver offline".to_string(),
            ));
        }

        Ok(self
            .records
            .read()
            .await
            .get(qname)
            .cloned()
            .unwrap_or_default())
    }
}
