//! MCP Server implementation.
//!
//! The handler owns nothing but its configuration and a tool router. Every
//! transport session clones it, so all sessions draw from one dice source.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines:
//! - Parameters struct (deserialized from the call arguments)
//! - `respond()` / `execute()` (core logic)
//! - `create_route()` (its entry in the rmcp ToolRouter)
//!
//! The ToolRouter is built in `domains/tools/router.rs`.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use crate::domains::tools::{DiceRng, build_tool_router, rng_from_config};

/// Instructions advertised to clients on initialization.
pub const INSTRUCTIONS: &str = "Dice server. Use roll_dice to roll one die (2-1000 sides), \
     roll_multiple to roll up to 100 dice and get their total, and coin_flip to flip a coin. \
     Arguments are text; blank values fall back to the defaults. \
     Failures are returned as text starting with \"❌ Error:\".";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let rng = rng_from_config(&config.dice);
        Self::with_rng(config, rng)
    }

    /// Create a server that draws from the given randomness source.
    pub fn with_rng(config: Config, rng: Arc<dyn DiceRng>) -> Self {
        Self {
            config: Arc::new(config),
            tool_router: build_tool_router::<Self>(rng),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
