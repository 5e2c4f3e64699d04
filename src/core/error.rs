//! Error types and handling for the MCP server.
//!
//! This module covers everything outside the tool boundary: loading the
//! configuration and running a transport. Tool failures never surface here;
//! the tools turn them into error-marked response text themselves.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::TransportError;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            Error::config("bad seed").to_string(),
            "Configuration error: bad seed"
        );
        assert_eq!(
            Error::from(TransportError::Handshake("eof".into())).to_string(),
            "Transport error: MCP handshake failed: eof"
        );
    }
}
