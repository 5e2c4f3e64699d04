//! Multiple dice roll tool definition.
//!
//! Rolls a batch of identical dice and reports every face in draw order
//! followed by the total.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::{
    Count, Sides, ToolResponse, decode_args, guarded, parse_int, text_arg,
};
use super::rng::DiceRng;
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the roll_multiple tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RollMultipleParams {
    /// Number of dice to roll (1-100). Blank means 2.
    #[serde(default = "default_count", deserialize_with = "text_arg")]
    pub count: String,

    /// Number of sides on each die (2-1000). Blank means 6.
    #[serde(default = "default_sides", deserialize_with = "text_arg")]
    pub sides: String,
}

fn default_count() -> String {
    Count::DEFAULT.to_string()
}

fn default_sides() -> String {
    Sides::DEFAULT.to_string()
}

impl Default for RollMultipleParams {
    fn default() -> Self {
        Self {
            count: default_count(),
            sides: default_sides(),
        }
    }
}

impl RollMultipleParams {
    pub fn new(count: impl Into<String>, sides: impl Into<String>) -> Self {
        Self {
            count: count.into(),
            sides: sides.into(),
        }
    }
}

/// The faces of one batch, in draw order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceRoll {
    pub count: Count,
    pub sides: Sides,
    pub rolls: Vec<u32>,
}

impl DiceRoll {
    /// Draw `count` independent values from `rng`.
    pub fn draw(count: Count, sides: Sides, rng: &dyn DiceRng) -> Self {
        let rolls = (0..count.get()).map(|_| rng.roll(sides)).collect();
        Self {
            count,
            sides,
            rolls,
        }
    }

    /// Sum of all faces. At most 100 * 1000, so `u32` cannot overflow.
    pub fn total(&self) -> u32 {
        self.rolls.iter().sum()
    }

    fn summary(&self) -> String {
        let listed = self
            .rolls
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "🎲 Rolled {}d{}: [{}]\n📊 Total: **{}**",
            self.count,
            self.sides,
            listed,
            self.total()
        )
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Roll multiple tool - rolls several dice at once.
pub struct RollMultipleTool;

impl RollMultipleTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "roll_multiple";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Roll multiple dice at once and return individual results plus total.";

    /// Execute the tool logic, wrapped for rmcp.
    pub fn execute(params: &RollMultipleParams, rng: &dyn DiceRng) -> CallToolResult {
        Self::respond(params, rng).into_call_result()
    }

    /// Roll and format, without the rmcp wrapping.
    #[instrument(skip_all, fields(count = %params.count, sides = %params.sides))]
    pub fn respond(params: &RollMultipleParams, rng: &dyn DiceRng) -> ToolResponse {
        info!("Rolling {} dice with {} sides", params.count, params.sides);

        guarded(Self::NAME, || {
            let count = parse_int(&params.count, i64::from(Count::DEFAULT));
            let sides = parse_int(&params.sides, i64::from(Sides::DEFAULT));
            let (Some(count), Some(sides)) = (count, sides) else {
                return Err(ToolError::InvalidCountOrSides);
            };

            // Count is validated before sides; the first failure wins.
            let count = Count::new(count)?;
            let sides = Sides::new(sides)?;

            Ok(DiceRoll::draw(count, sides, rng).summary())
        })
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<RollMultipleParams>().into(),
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
            let decoded = decode_args::<RollMultipleParams>(ctx.arguments.clone());
            let rng = rng.clone();
            async move { decoded.map(|params| Self::execute(&params, rng.as_ref())) }.boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
