//! MCP over TCP.
//!
//! Each accepted connection carries line-delimited JSON-RPC for its own
//! session. Sessions share the server's dice source and nothing else.

use std::net::SocketAddr;
use std::time::Duration;

use rmcp::ServiceExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, instrument, warn};

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// Pause after a failed `accept` so a persistent error does not spin.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// A bound listener waiting for MCP clients.
pub struct TcpTransport {
    listener: TcpListener,
}

impl TcpTransport {
    /// Listen on `host:port`. Port 0 asks the OS for a free port.
    pub async fn bind(host: &str, port: u16) -> TransportResult<Self> {
        let address = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&address)
            .await
            .map_err(|source| TransportError::Bind { address, source })?;

        Ok(Self { listener })
    }

    /// The address actually bound.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept clients until the process exits.
    pub async fn accept_loop(self, server: McpServer) -> TransportResult<()> {
        if let Ok(addr) = self.local_addr() {
            info!("Listening for MCP clients on {}", addr);
        }

        loop {
            let (stream, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                    continue;
                }
            };

            if let Err(e) = stream.set_nodelay(true) {
                debug!(%peer, "TCP_NODELAY not set: {}", e);
            }

            tokio::spawn(session(server.clone(), stream, peer));
        }
    }
}

#[instrument(name = "tcp_session", skip(server, stream))]
async fn session(server: McpServer, stream: TcpStream, peer: SocketAddr) {
    let running = match server.serve(stream).await {
        Ok(running) => running,
        Err(e) => {
            warn!("Handshake failed: {}", e);
            return;
        }
    };
    info!("Client attached");

    match running.waiting().await {
        Ok(reason) => info!("Client detached: {:?}", reason),
        Err(e) => warn!("Session task failed: {}", e),
    }
}
