//! Shared pieces of the dice tools.
//!
//! Textual arguments are parsed into bounded types ([`Sides`], [`Count`]) at the
//! tool boundary. Tool bodies return `Result<String, ToolError>` and only
//! [`guarded`] turns that (or a panic) into the single response string the
//! calling agent receives.

use std::any::Any;
use std::fmt;
use std::num::IntErrorKind;
use std::panic::{self, AssertUnwindSafe};

use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use tracing::{error, warn};

use crate::domains::tools::ToolError;

/// Prefix of every failure response.
pub const ERROR_MARKER: &str = "❌ Error:";

// ============================================================================
// Bounded inputs
// ============================================================================

/// Number of faces on a die, always within `[Sides::MIN, Sides::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sides(u32);

impl Sides {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 1000;
    pub const DEFAULT: u32 = 6;

    /// Validate a parsed integer. The minimum is checked before the maximum.
    pub fn new(value: i64) -> Result<Self, ToolError> {
        if value < i64::from(Self::MIN) {
            return Err(ToolError::TooFewSides);
        }
        if value > i64::from(Self::MAX) {
            return Err(ToolError::TooManySides);
        }
        Ok(Self(value as u32))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Sides {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for Sides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Number of dice in a batch, always within `[Count::MIN, Count::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Count(u32);

impl Count {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 100;
    pub const DEFAULT: u32 = 2;

    /// Validate a parsed integer. The minimum is checked before the maximum.
    pub fn new(value: i64) -> Result<Self, ToolError> {
        if value < i64::from(Self::MIN) {
            return Err(ToolError::TooFewDice);
        }
        if value > i64::from(Self::MAX) {
            return Err(ToolError::TooManyDice);
        }
        Ok(Self(value as u32))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Count {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse a textual integer argument.
///
/// Surrounding whitespace is ignored and blank text yields `default`. Single
/// underscores may group ASCII digits (`1_000`). Returns `None` when the text
/// is not an integer. Integers too large for `i64` saturate so they still
/// fail range validation on the correct bound.
pub fn parse_int(text: &str, default: i64) -> Option<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(default);
    }

    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let grouped = digits.split('_').all(|group| {
        !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit())
    });
    if !grouped {
        return None;
    }

    let plain = format!("{}{}", sign, digits.replace('_', ""));
    match plain.parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Deserialize a textual argument that agents may also send as a number.
///
/// `null` becomes empty text, which later falls back to the default.
pub fn text_arg<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number, found {}",
            other
        ))),
    }
}

/// Decode call arguments into a tool's parameters.
///
/// A call without arguments gets every default. Arguments of the wrong JSON
/// type are an invalid-params protocol error.
pub fn decode_args<P: DeserializeOwned>(arguments: Option<JsonObject>) -> Result<P, McpError> {
    let object = arguments.unwrap_or_default();
    serde_json::from_value(serde_json::Value::Object(object))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

// ============================================================================
// Responses
// ============================================================================

/// What a dice tool hands back to the host framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolResponse {
    /// A computed outcome, already formatted.
    Success(String),
    /// The reason the tool could not produce an outcome.
    Failure(String),
}

impl ToolResponse {
    /// Render the response text, adding the error marker to failures.
    pub fn into_text(self) -> String {
        match self {
            Self::Success(text) => text,
            Self::Failure(reason) => format!("{} {}", ERROR_MARKER, reason),
        }
    }

    /// Wrap the response for rmcp.
    ///
    /// Failures travel on the same text channel as successes; the marker is
    /// the only discriminator callers rely on.
    pub fn into_call_result(self) -> CallToolResult {
        CallToolResult::success(vec![Content::text(self.into_text())])
    }
}

impl From<Result<String, ToolError>> for ToolResponse {
    fn from(result: Result<String, ToolError>) -> Self {
        match result {
            Ok(text) => Self::Success(text),
            Err(e) => Self::Failure(e.to_string()),
        }
    }
}

/// Run a tool body so that nothing but a response ever leaves it.
///
/// Validation failures are logged at `warn`; panics and other internal
/// faults are logged at `error` and reported with their message.
pub fn guarded<F>(tool: &str, body: F) -> ToolResponse
where
    F: FnOnce() -> Result<String, ToolError>,
{
    let outcome = panic::catch_unwind(AssertUnwindSafe(body))
        .unwrap_or_else(|payload| Err(ToolError::internal(panic_message(payload.as_ref()))));

    if let Err(e) = &outcome {
        if e.is_validation() {
            warn!(tool = %tool, "Rejected input: {}", e);
        } else {
            error!(tool = %tool, "Error: {}", e);
        }
    }

    outcome.into()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unexpected internal error".to_string()
    }
}
