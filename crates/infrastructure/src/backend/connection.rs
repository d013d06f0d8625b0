use futures::{SinkExt, StreamExt};
use pdns_backend_application::use_cases::HandleBackendRequestUseCase;
use pdns_backend_domain::config::ProtocolConfig;
use pdns_backend_domain::{BackendReply, BackendRequest};
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::Framed;
use tracing::{debug, error, info, warn};

use super::codec::{BackendCodec, InboundFrame};

/// Serves one accepted connection until the peer goes away.
///
/// Requests on a connection are answered strictly in order. Nothing that goes
/// wrong with a single request closes the connection: malformed input,
/// dispatch misses and failed writes are logged and the loop keeps reading.
/// Only a read error or EOF ends it.
pub struct ConnectionHandler {
    use_case: Arc<HandleBackendRequestUseCase>,
    protocol: ProtocolConfig,
}

impl ConnectionHandler {
    pub fn new(use_case: Arc<HandleBackendRequestUseCase>, protocol: ProtocolConfig) -> Self {
        Self { use_case, protocol }
    }

    pub async fn run<S>(&self, stream: S)
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let mut framed = Framed::new(stream, BackendCodec::from_config(&self.protocol));

        while let Some(frame) = framed.next().await {
            let frame = match frame {
                Ok(frame) => frame,
                Err(e) => {
                    warn!(error = %e, "Read failed, closing connection");
                    break;
                }
            };

            info!(payload = %String::from_utf8_lossy(frame.payload()), "Server got request");

            let request = match frame {
                InboundFrame::Request { request, .. } => request,
                InboundFrame::Malformed { reason, .. } => {
                    warn!(error = %reason, "Failed to decode backend request");
                    continue;
                }
            };

            let Some(reply) = self.dispatch(&request).await else {
                continue;
            };

            if let Err(e) = framed.send(reply).await {
                error!(method = %request.method, error = %e, "Failed to write response");
            }
        }

        debug!("Connection closed");
    }

    async fn dispatch(&self, request: &BackendRequest) -> Option<BackendReply> {
        match self.use_case.execute(request).await {
            Ok(reply) => Some(reply),
            Err(e) if e.is_dispatch_miss() => {
                warn!(method = %request.method, error = %e, "Request not supported");
                self.protocol
                    .reply_on_unsupported
                    .then(BackendReply::failure)
            }
            Err(e) => {
                error!(method = %request.method, error = %e, "Request dispatch failed");
                None
            }
        }
    }
}
