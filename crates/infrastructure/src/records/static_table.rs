use async_trait::async_trait;
use pdns_backend_application::ports::RecordResolver;
use pdns_backend_domain::config::RecordsConfig;
use pdns_backend_domain::DomainError;
use std::collections::HashMap;
use std::sync::Arc;

/// Fixed name -> content table, built once at startup.
///
/// Never mutated after construction, so clones share one map and reads take
/// no lock.
#[derive(Debug, Clone, Default)]
pub struct StaticRecordTable {
    entries: Arc<HashMap<String, String>>,
}

impl StaticRecordTable {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    pub fn from_config(config: &RecordsConfig) -> Self {
        Self::new(config.entries.clone())
    }

    /// Exact-match lookup; unknown names yield `""`.
    pub fn lookup(&self, qname: &str) -> &str {
        self.entries.get(qname).map(String::as_str).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for StaticRecordTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[async_trait]
impl RecordResolver for StaticRecordTable {
    async fn resolve(&self, qname: &str) -> Result<String, DomainError> {
        Ok(self.lookup(qname).to_string())
    }
}
