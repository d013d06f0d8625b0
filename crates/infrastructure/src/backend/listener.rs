use pdns_backend_domain::DomainError;
use std::os::unix::fs::FileTypeExt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::net::UnixListener;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, info_span, Instrument};

use super::connection::ConnectionHandler;

/// Accept loop on the backend socket.
///
/// Every accepted connection gets its own task; acceptance never waits for
/// existing connections. There is no drain: cancelling only stops accepting.
pub struct BackendListener {
    listener: UnixListener,
    socket_path: PathBuf,
    handler: Arc<ConnectionHandler>,
    shutdown: Option<CancellationToken>,
    next_connection_id: AtomicU64,
}

impl BackendListener {
    pub fn bind(
        socket_path: impl AsRef<Path>,
        remove_stale_socket: bool,
        handler: Arc<ConnectionHandler>,
    ) -> Result<Self, DomainError> {
        let socket_path = socket_path.as_ref().to_path_buf();

        if remove_stale_socket {
            remove_stale_socket_file(&socket_path)?;
        }

        let listener = UnixListener::bind(&socket_path).map_err(|e| {
            DomainError::IoError(format!(
                "Failed to bind backend socket {}: {}",
                socket_path.display(),
                e
            ))
        })?;

        info!(path = %socket_path.display(), "Backend socket listening");

        Ok(Self {
            listener,
            socket_path,
            handler,
            shutdown: None,
            next_connection_id: AtomicU64::new(1),
        })
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    /// Runs until cancelled or until `accept` fails. An accept failure is
    /// returned to the caller.
    pub async fn run(self) -> Result<(), DomainError> {
        let result = self.accept_loop().await;

        if let Err(e) = std::fs::remove_file(&self.socket_path) {
            debug!(path = %self.socket_path.display(), error = %e, "Socket file not removed");
        }

        result
    }

    async fn accept_loop(&self) -> Result<(), DomainError> {
        loop {
            let accepted = match &self.shutdown {
                Some(token) => tokio::select! {
                    _ = token.cancelled() => {
                        info!("Backend listener shutting down");
                        return Ok(());
                    }
                    accepted = self.listener.accept() => accepted,
                },
                None => self.listener.accept().await,
            };

            let (stream, _) = accepted.map_err(|e| {
                error!(error = %e, "Accept failed");
                DomainError::IoError(format!("accept error: {}", e))
            })?;

            let id = self.next_connection_id.fetch_add(1, Ordering::Relaxed);
            debug!(connection = id, "Connection accepted");

            let handler = Arc::clone(&self.handler);
            tokio::spawn(
                async move { handler.run(stream).await }.instrument(info_span!("connection", id)),
            );
        }
    }
}

/// Removes a socket left behind by a previous run. Anything at the path that
/// is not a socket is left alone and reported.
fn remove_stale_socket_file(path: &Path) -> Result<(), DomainError> {
    let metadata = match std::fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(DomainError::IoError(format!(
                "Failed to inspect {}: {}",
                path.display(),
                e
            )))
        }
    };

    if !metadata.file_type().is_socket() {
        return Err(DomainError::IoError(format!(
            "Refusing to remove {}: not a socket",
            path.display()
        )));
    }

    debug!(path = %path.display(), "Removing stale socket file");
    std::fs::remove_file(path).map_err(|e| {
        DomainError::IoError(format!(
            "Failed to remove stale socket {}: {}",
            path.display(),
            e
        ))
    })
}
