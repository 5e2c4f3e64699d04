//! Tools domain module.
//!
//! Tools are executable functions that MCP clients call. This server exposes
//! three stateless randomness tools: `roll_dice`, `roll_multiple` and
//! `coin_flip`.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Builds the rmcp ToolRouter every transport dispatches through
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define params, `respond()` and `create_route()`
//! 3. Export in `definitions/mod.rs`
//! 4. Add route in `router.rs` using `with_route()`

pub mod definitions;
mod error;
pub mod router;

pub use definitions::dice::{DiceRng, SeededRandom, ThreadRandom, rng_from_config};
pub use error::ToolError;
pub use router::build_tool_router;
