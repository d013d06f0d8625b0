use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::unix::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::UnixStream;

const REPLY_TIMEOUT: Duration = Duration::from_secs(5);
const SILENCE_WINDOW: Duration = Duration::from_millis(150);

/// Minimal stand-in for the DNS server side of the socket.
pub struct BackendClient {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

impl BackendClient {
    pub async fn connect(path: &Path) -> Self {
        let stream = UnixStream::connect(path).await.unwrap();
        let (read_half, write_half) = stream.into_split();
        Self {
            reader: BufReader::new(read_half),
            writer: write_half,
        }
    }

    pub async fn send(&mut self, payload: &str) {
        self.writer.write_all(payload.as_bytes()).await.unwrap();
        self.writer.flush().await.unwrap();
    }

    pub async fn recv_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match tokio::time::timeout(REPLY_TIMEOUT, self.reader.read_line(&mut line)).await {
            Ok(Ok(0)) => None,
            Ok(Ok(_)) => Some(line),
            Ok(Err(e)) => panic!("read failed: {e}"),
            Err(_) => panic!("no reply within {REPLY_TIMEOUT:?}"),
        }
    }

    pub async fn recv(&mut self) -> Value {
        let line = self.recv_line().await.expect("connection closed");
        serde_json::from_str(&line).unwrap()
    }

    pub async fn call(&mut self, payload: &str) -> Value {
        self.send(payload).await;
        self.recv().await
    }

    /// True when nothing arrives within a short window.
    pub async fn stays_silent(&mut self) -> bool {
        let mut line = String::new();
        tokio::time::timeout(SILENCE_WINDOW, self.reader.read_line(&mut line))
            .await
            .is_err()
    }
}
