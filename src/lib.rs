//! Dice MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing three stateless randomness
//! tools to a calling agent:
//!
//! - `roll_dice`: roll one die with 2-1000 sides
//! - `roll_multiple`: roll 1-100 identical dice and report the total
//! - `coin_flip`: flip a fair coin
//!
//! Every tool call returns a single text response. Failures are text too,
//! prefixed with `❌ Error:`; no fault ever escapes a tool as a protocol error.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and its
//!   stdio (and optional TCP) transport
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the dice tools and their router
//!
//! # Example
//!
//! ```rust,no_run
//! use dice_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let transport = config.transport.clone();
//!     transport.serve(McpServer::new(config)).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

#[cfg(test)]
mod test_support;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
