//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Ways a transport can fail before or during a session.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The listening socket could not be opened.
    #[error("cannot listen on {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The client never completed the MCP initialize exchange.
    #[error("MCP handshake failed: {0}")]
    Handshake(String),

    /// A running session ended abnormally.
    #[error("MCP session aborted: {0}")]
    Session(String),
}
