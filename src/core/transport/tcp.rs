//! TCP transport implementation.
//!
//! Line-delimited JSON transport: each line received on a connection is
//! decoded into one request object and handed to the dispatcher, and the
//! resulting envelope is written back as one line. Requests on a
//! connection are processed strictly one at a time.

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;
use crate::domains::tools::dispatch;
use crate::domains::tools::error_result;

/// TCP transport handler.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    /// Create a new TCP transport with the given config.
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the TCP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "{} ready - listening on {} (line-delimited JSON)",
            server.name(),
            addr
        );

        // Accept multiple connections in a loop
        loop {
            match listener.accept().await {
                Ok((stream, peer_addr)) => {
                    info!("Accepted connection from {}", peer_addr);

                    // Set TCP_NODELAY to disable Nagle's algorithm
                    if let Err(e) = stream.set_nodelay(true) {
                        warn!("Failed to set TCP_NODELAY for {}: {}", peer_addr, e);
                    }

                    // Spawn a task to handle this connection
                    tokio::spawn(async move {
                        Self::handle_connection(stream, peer_addr).await;
                    });
                }
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    // Small delay to avoid spinning on persistent errors
                    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
                }
            }
        }
    }

    /// Handle a single TCP connection, one request per line.
    async fn handle_connection(stream: TcpStream, peer_addr: std::net::SocketAddr) {
        let (reader, mut writer) = stream.into_split();
        let mut lines = BufReader::new(reader).lines();

        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    warn!("Error reading from {}: {}", peer_addr, e);
                    break;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            let envelope = match serde_json::from_str::<Value>(&line) {
                Ok(request) => dispatch::handle_request(&request),
                Err(e) => error_result(&format!("Invalid request: {}", e)),
            };

            let payload = serde_json::json!({
                "content": envelope.content,
                "isError": envelope.is_error.unwrap_or(false),
            });

            let mut response = payload.to_string();
            response.push('\n');

            if let Err(e) = writer.write_all(response.as_bytes()).await {
                warn!("Error writing to {}: {}", peer_addr, e);
                break;
            }
        }

        info!("Client {} disconnected", peer_addr);
    }
}
