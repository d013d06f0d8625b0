#![allow(dead_code)]

mod backend_client;
mod flaky_stream;

pub use backend_client::BackendClient;
pub use flaky_stream::FlakyStream;

use pdns_backend_application::ports::RecordResolver;
use pdns_backend_application::services::SerialGenerator;
use pdns_backend_application::use_cases::HandleBackendRequestUseCase;
use pdns_backend_domain::config::{ProtocolConfig, RecordsConfig};
use pdns_backend_infrastructure::backend::{BackendListener, ConnectionHandler};
use pdns_backend_infrastructure::records::StaticRecordTable;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

pub fn static_records() -> Arc<dyn RecordResolver> {
    Arc::new(StaticRecordTable::from_config(&RecordsConfig::default()))
}

pub fn connection_handler(
    resolver: Arc<dyn RecordResolver>,
    serials: Arc<SerialGenerator>,
    protocol: ProtocolConfig,
) -> Arc<ConnectionHandler> {
    let use_case = Arc::new(HandleBackendRequestUseCase::new(resolver, serials));
    Arc::new(ConnectionHandler::new(use_case, protocol))
}

pub struct TestBackend {
    dir: TempDir,
    socket_path: PathBuf,
    shutdown: CancellationToken,
    task: JoinHandle<()>,
    pub serials: Arc<SerialGenerator>,
}

impl TestBackend {
    pub async fn start() -> Self {
        Self::start_with(ProtocolConfig::default()).await
    }

    pub async fn start_with(protocol: ProtocolConfig) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let socket_path = dir.path().join("pdnsbackend.sock");

        let serials = Arc::new(SerialGenerator::new());
        let handler = connection_handler(static_records(), serials.clone(), protocol);

        let shutdown = CancellationToken::new();
        let listener = BackendListener::bind(&socket_path, true, handler)
            .unwrap()
            .with_cancellation(shutdown.clone());

        let task = tokio::spawn(async move {
            listener.run().await.unwrap();
        });

        Self {
            dir,
            socket_path,
            shutdown,
            task,
            serials,
        }
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    pub async fn connect(&self) -> BackendClient {
        BackendClient::connect(&self.socket_path).await
    }

    /// Hands back the temp dir so callers can inspect it after shutdown.
    pub async fn stop(self) -> TempDir {
        self.shutdown.cancel();
        self.task.await.unwrap();
        self.dir
    }
}
