//! Dice MCP Server Entry Point
//!
//! Loads configuration, installs the stderr log subscriber and serves the
//! dice tools over the configured transport. Stdout is reserved for protocol
//! frames when running over stdio.

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use dice_mcp_server::core::config::LoggingConfig;
use dice_mcp_server::core::{Config, McpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("loading configuration")?;
    init_logging(&config.logging);

    info!(
        server = %config.server.name,
        version = %config.server.version,
        transport = %config.transport,
        "Dice server starting"
    );

    let transport = config.transport.clone();
    if let Err(e) = transport.serve(McpServer::new(config)).await {
        error!("Server stopped: {}", e);
        return Err(e.into());
    }

    info!("Dice server stopped");
    Ok(())
}

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise `MCP_LOG_LEVEL` is used as the filter,
/// falling back to `info` when it does not parse.
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false);

    if logging.with_timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
