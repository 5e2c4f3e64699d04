//! Tool-specific error types.
//!
//! The `Display` text of each variant is exactly what the calling agent sees
//! after the error marker, so wording changes here are wire changes.

use thiserror::Error;

use super::definitions::dice::{Count, Sides};

/// Errors that can occur during tool operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// The `sides` text of a single roll is not an integer.
    #[error("Invalid sides value: {0}")]
    InvalidSides(String),

    /// Either the `count` or the `sides` text of a batch roll is not an integer.
    #[error("Invalid count or sides value")]
    InvalidCountOrSides,

    /// Fewer sides than the smallest allowed die.
    #[error("Dice must have at least {} sides", Sides::MIN)]
    TooFewSides,

    /// More sides than the largest allowed die.
    #[error("Maximum {} sides allowed", Sides::MAX)]
    TooManySides,

    /// Fewer dice than a batch allows.
    #[error("Must roll at least {} die", Count::MIN)]
    TooFewDice,

    /// More dice than a batch allows.
    #[error("Maximum {} dice allowed", Count::MAX)]
    TooManyDice,

    /// An unexpected fault inside a tool body.
    #[error("{0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error comes from rejecting caller input.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}
