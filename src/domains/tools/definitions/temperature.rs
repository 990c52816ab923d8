//! Temperature conversion tool definition.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, JsonObject, Tool},
};
use tracing::{info, instrument};

use crate::domains::conversion::validation::TEMPERATURE_CONVERSION_SCHEMA;
use crate::domains::conversion::{UnitKind, convert_temperature, validate_conversion_request};
use crate::domains::tools::response::{error_result, success_result};

use super::ConversionRequest;

// ============================================================================
// Tool Definition
// ============================================================================

/// Temperature conversion tool - converts between Celsius and Fahrenheit.
pub struct ConvertTemperatureTool;

impl ConvertTemperatureTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "convert_temperature";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Convert between cooking temperature units (C, F)";

    /// Execute the tool logic.
    ///
    /// Unlike volume and weight, negative values are valid here.
    #[instrument(skip_all)]
    pub fn execute(arguments: &JsonObject) -> CallToolResult {
        if let Some(message) = validate_conversion_request(arguments, UnitKind::Temperature) {
            return error_result(&message);
        }

        let request = match ConversionRequest::from_arguments(arguments) {
            Ok(request) => request,
            Err(error) => return error_result(&error.to_string()),
        };

        match convert_temperature(request.value, &request.from_unit, &request.to_unit) {
            Ok(converted) => {
                info!(
                    "Converted {} -> {} {}",
                    request.from_unit, converted, request.to_unit
                );
                success_result(&converted, &request.to_unit)
            }
            Err(error) => error_result(&error.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: Arc::new(
                TEMPERATURE_CONVERSION_SCHEMA
                    .as_object()
                    .cloned()
                    .unwrap_or_default(),
            ),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move { Ok(Self::execute(&args)) }.boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            _ => panic!("Expected text content"),
        }
    }

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_execute_success() {
        let result = ConvertTemperatureTool::execute(&args(json!({
            "value": 100, "from_unit": "C", "to_unit": "F"
        })));
        assert!(!result.is_error.unwrap_or(true));
        assert_eq!(text_of(&result), "212.0000 F");
    }

    #[test]
    fn test_execute_accepts_negative_temperature() {
        let result = ConvertTemperatureTool::execute(&args(json!({
            "value": -18, "from_unit": "C", "to_unit": "F"
        })));
        assert!(!result.is_error.unwrap_or(true));
        assert_eq!(text_of(&result), "-0.4000 F");
    }

    #[test]
    fn test_execute_rejects_unknown_unit() {
        let result = ConvertTemperatureTool::execute(&args(json!({
            "value": 100, "from_unit": "K", "to_unit": "C"
        })));
        assert!(result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_execute_rejects_non_numeric_value() {
        let result = ConvertTemperatureTool::execute(&args(json!({
            "value": "abc", "from_unit": "C", "to_unit": "F"
        })));
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "Invalid value format: abc");
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = ConvertTemperatureTool::to_tool();
        assert_eq!(tool.name.as_ref(), "convert_temperature");
        assert_eq!(
            tool.input_schema["properties"]["from_unit"]["enum"],
            json!(["C", "F"])
        );
    }
}
