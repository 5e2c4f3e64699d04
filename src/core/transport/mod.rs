//! How MCP clients reach the dice server.
//!
//! Hosts normally spawn the server and speak over its stdin/stdout. Builds
//! with the `tcp` feature can instead listen on a socket, chosen at startup
//! with `MCP_TRANSPORT=tcp`.

mod error;
mod stdio;
#[cfg(feature = "tcp")]
mod tcp;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub use error::{TransportError, TransportResult};
#[cfg(feature = "tcp")]
pub use tcp::TcpTransport;

use super::error::Result;
#[cfg(feature = "tcp")]
use super::error::Error;
use super::server::McpServer;

#[cfg(feature = "tcp")]
const DEFAULT_TCP_HOST: &str = "127.0.0.1";
#[cfg(feature = "tcp")]
const DEFAULT_TCP_PORT: u16 = 3000;

/// The channel a server session runs over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Transport {
    /// A single session on the process's stdin/stdout.
    #[default]
    Stdio,

    /// One session per accepted TCP connection.
    #[cfg(feature = "tcp")]
    Tcp { host: String, port: u16 },
}

impl Transport {
    /// Read `MCP_TRANSPORT` (and, for TCP, `MCP_TCP_HOST` / `MCP_TCP_PORT`).
    ///
    /// Unset means stdio. A transport this build cannot serve is logged and
    /// replaced by stdio.
    pub fn from_env() -> Result<Self> {
        let requested = std::env::var("MCP_TRANSPORT").unwrap_or_default();

        match requested.trim().to_ascii_lowercase().as_str() {
            "" | "stdio" => Ok(Self::Stdio),
            #[cfg(feature = "tcp")]
            "tcp" => {
                let host = std::env::var("MCP_TCP_HOST")
                    .unwrap_or_else(|_| DEFAULT_TCP_HOST.to_string());
                let port = match std::env::var("MCP_TCP_PORT") {
                    Ok(port) => port.trim().parse::<u16>().map_err(|e| {
                        Error::config(format!("MCP_TCP_PORT must be a port number: {}", e))
                    })?,
                    Err(_) => DEFAULT_TCP_PORT,
                };
                Ok(Self::Tcp { host, port })
            }
            other => {
                warn!("Transport '{}' is not available in this build, using stdio", other);
                Ok(Self::Stdio)
            }
        }
    }

    /// Serve `server` until the transport shuts down.
    pub async fn serve(self, server: McpServer) -> Result<()> {
        info!("Starting transport: {}", self);

        match self {
            Self::Stdio => stdio::serve(server).await?,
            #[cfg(feature = "tcp")]
            Self::Tcp { host, port } => {
                TcpTransport::bind(&host, port)
                    .await?
                    .accept_loop(server)
                    .await?
            }
        }

        Ok(())
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdio => f.write_str("stdio"),
            #[cfg(feature = "tcp")]
            Self::Tcp { host, port } => write!(f, "tcp://{}:{}", host, port),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::env_lock;

    fn from_env_with(vars: &[(&str, &str)]) -> Result<Transport> {
        let _lock = env_lock();
        for (key, value) in vars {
            unsafe { std::env::set_var(key, value) };
        }
        let transport = Transport::from_env();
        for (key, _) in vars {
            unsafe { std::env::remove_var(key) };
        }
        transport
    }

    #[test]
    fn test_default_is_stdio() {
        assert_eq!(Transport::default(), Transport::Stdio);
        assert_eq!(Transport::Stdio.to_string(), "stdio");
    }

    #[test]
    fn test_unknown_transport_falls_back_to_stdio() {
        let transport = from_env_with(&[("MCP_TRANSPORT", "carrier-pigeon")]).unwrap();
        assert_eq!(transport, Transport::Stdio);
    }

    #[test]
    fn test_transport_name_is_case_insensitive() {
        let transport = from_env_with(&[("MCP_TRANSPORT", " STDIO ")]).unwrap();
        assert_eq!(transport, Transport::Stdio);
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_from_env() {
        let transport =
            from_env_with(&[("MCP_TRANSPORT", "TCP"), ("MCP_TCP_PORT", "4567")]).unwrap();
        assert_eq!(
            transport,
            Transport::Tcp {
                host: "127.0.0.1".to_string(),
                port: 4567
            }
        );
        assert_eq!(transport.to_string(), "tcp://127.0.0.1:4567");
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_bad_tcp_port_is_config_error() {
        let result = from_env_with(&[("MCP_TRANSPORT", "tcp"), ("MCP_TCP_PORT", "65536")]);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[cfg(not(feature = "tcp"))]
    #[test]
    fn test_tcp_without_feature_uses_stdio() {
        let transport = from_env_with(&[("MCP_TRANSPORT", "tcp")]).unwrap();
        assert_eq!(transport, Transport::Stdio);
    }
}
