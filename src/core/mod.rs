//! Server plumbing shared by every tool: settings, the error type, the rmcp
//! handler and the transports it is served over.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::Transport;
