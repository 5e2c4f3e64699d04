//! Coin flip tool definition.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::{ToolResponse, decode_args, guarded};
use super::rng::DiceRng;

/// The coin flip tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CoinFlipParams {}

/// One side of the coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinFace {
    Heads,
    Tails,
}

impl CoinFace {
    pub fn toss(rng: &dyn DiceRng) -> Self {
        if rng.flip() { Self::Heads } else { Self::Tails }
    }
}

impl fmt::Display for CoinFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heads => f.write_str("Heads"),
            Self::Tails => f.write_str("Tails"),
        }
    }
}

/// Coin flip tool.
pub struct CoinFlipTool;

impl CoinFlipTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "coin_flip";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Flip a coin and return heads or tails.";

    /// Execute the tool logic, wrapped for rmcp.
    pub fn execute(_params: &CoinFlipParams, rng: &dyn DiceRng) -> CallToolResult {
        Self::respond(rng).into_call_result()
    }

    #[instrument(skip_all)]
    pub fn respond(rng: &dyn DiceRng) -> ToolResponse {
        info!("Flipping coin");

        guarded(Self::NAME, || {
            Ok(format!("🪙 Coin flip: **{}**", CoinFace::toss(rng)))
        })
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<CoinFlipParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create the rmcp route for this tool.
    pub fn create_route<S>(rng: Arc<dyn DiceRng>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let decoded = decode_args::<CoinFlipParams>(ctx.arguments.clone());
            let rng = rng.clone();
            async move { decoded.map(|params| Self::execute(&params, rng.as_ref())) }.boxed()
        })
    }
}
