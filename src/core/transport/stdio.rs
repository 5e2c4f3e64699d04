//! MCP over the process's own stdin/stdout.
//!
//! Stdout carries protocol frames and nothing else; logs go to stderr.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// Run one session until the client closes stdin.
pub(super) async fn serve(server: McpServer) -> TransportResult<()> {
    let session = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| TransportError::Handshake(e.to_string()))?;
    info!("Client attached on stdio");

    let reason = session
        .waiting()
        .await
        .map_err(|e| TransportError::Session(e.to_string()))?;
    info!("Stdio session closed: {:?}", reason);

    Ok(())
}
