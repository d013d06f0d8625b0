use pdns_backend_domain::config::ServerConfig;
use pdns_backend_infrastructure::backend::{BackendListener, ConnectionHandler};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub async fn start_backend_server(
    server: &ServerConfig,
    handler: Arc<ConnectionHandler>,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    info!(socket = %server.socket_path, "Starting backend server");

    let listener = BackendListener::bind(&server.socket_path, server.remove_stale_socket, handler)?
        .with_cancellation(shutdown);

    listener.run().await?;
    Ok(())
}
