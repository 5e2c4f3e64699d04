//! Dice tools: single rolls, batch rolls and coin flips.

pub mod coin_flip;
pub mod common;
pub mod rng;
pub mod roll_dice;
pub mod roll_multiple;

pub use coin_flip::{CoinFace, CoinFlipParams, CoinFlipTool};
pub use common::{Count, ERROR_MARKER, Sides, ToolResponse};
pub use rng::{DiceRng, SeededRandom, ThreadRandom, rng_from_config};
pub use roll_dice::{RollDiceParams, RollDiceTool};
pub use roll_multiple::{DiceRoll, RollMultipleParams, RollMultipleTool};
