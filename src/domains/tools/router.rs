//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only collects
//! them and hands every route the same randomness source.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::dice::DiceRng;
use super::definitions::{CoinFlipTool, RollDiceTool, RollMultipleTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(rng: Arc<dyn DiceRng>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(RollDiceTool::create_route(rng.clone()))
        .with_route(RollMultipleTool::create_route(rng.clone()))
        .with_route(CoinFlipTool::create_route(rng))
}

#[cfg(test)]
mod tests {
    use super::super::definitions::dice::ThreadRandom;
    use super::*;

    struct TestServer {}

    fn test_rng() -> Arc<dyn DiceRng> {
        Arc::new(ThreadRandom)
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_rng());
        let tools = router.list_all();
        assert_eq!(tools.len(), 3);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"roll_dice"));
        assert!(names.contains(&"roll_multiple"));
        assert!(names.contains(&"coin_flip"));
    }

    #[test]
    fn test_routes_carry_descriptions() {
        let router: ToolRouter<TestServer> = build_tool_router(test_rng());
        for tool in router.list_all() {
            assert!(tool.description.is_some(), "{} has no description", tool.name);
        }
    }
}
