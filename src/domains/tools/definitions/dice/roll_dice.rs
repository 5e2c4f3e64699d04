//! Single die roll tool definition.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::{Sides, ToolResponse, decode_args, guarded, parse_int, text_arg};
use super::rng::DiceRng;
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the roll_dice tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RollDiceParams {
    /// Number of sides on the die (2-1000). Blank means 6.
    #[serde(default = "default_sides", deserialize_with = "text_arg")]
    pub sides: String,
}

fn default_sides() -> String {
    Sides::DEFAULT.to_string()
}

impl Default for RollDiceParams {
    fn default() -> Self {
        Self {
            sides: default_sides(),
        }
    }
}

impl RollDiceParams {
    pub fn new(sides: impl Into<String>) -> Self {
        Self {
            sides: sides.into(),
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Roll dice tool - rolls one die with a configurable number of sides.
pub struct RollDiceTool;

impl RollDiceTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "roll_dice";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Roll a single dice with the specified number of sides (default: 6).";

    /// Execute the tool logic, wrapped for rmcp.
    pub fn execute(params: &RollDiceParams, rng: &dyn DiceRng) -> CallToolResult {
        Self::respond(params, rng).into_call_result()
    }

    /// Roll and format, without the rmcp wrapping.
    #[instrument(skip_all, fields(sides = %params.sides))]
    pub fn respond(params: &RollDiceParams, rng: &dyn DiceRng) -> ToolResponse {
        info!("Rolling dice with sides={}", params.sides);

        guarded(Self::NAME, || {
            let sides = parse_int(&params.sides, i64::from(Sides::DEFAULT))
                .ok_or_else(|| ToolError::InvalidSides(params.sides.clone()))
                .and_then(Sides::new)?;

            let value = rng.roll(sides);
            Ok(format!("🎲 Rolled a d{}: **{}**", sides, value))
        })
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<RollDiceParams>().into(),
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
            let decoded = decode_args::<RollDiceParams>(ctx.arguments.clone());
            let rng = rng.clone();
            async move { decoded.map(|params| Self::execute(&params, rng.as_ref())) }.boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
