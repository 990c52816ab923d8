//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod temperature;
pub mod volume;
pub mod weight;

pub use temperature::ConvertTemperatureTool;
pub use volume::ConvertVolumeTool;
pub use weight::ConvertWeightTool;

use rmcp::model::JsonObject;
use serde::Deserialize;
use serde_json::Value;

use super::error::ToolError;
use crate::domains::conversion::Amount;

/// A conversion request as carried by tool arguments.
///
/// All three tools share this shape; the arguments are schema-validated
/// before deserialization, so any failure here means the request mutated
/// between the two steps.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversionRequest {
    /// Amount to convert, as a JSON number or numeric string.
    pub value: Amount,

    /// Source unit token.
    pub from_unit: String,

    /// Target unit token.
    pub to_unit: String,
}

impl ConversionRequest {
    /// Deserialize a request from raw tool arguments.
    pub fn from_arguments(arguments: &JsonObject) -> Result<Self, ToolError> {
        serde_json::from_value(Value::Object(arguments.clone()))
            .map_err(|error| ToolError::invalid_arguments(error.to_string()))
    }
}
