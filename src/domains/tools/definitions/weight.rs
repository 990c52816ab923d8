//! Weight conversion tool definition.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, JsonObject, Tool},
};
use tracing::{info, instrument};

use crate::domains::conversion::validation::WEIGHT_CONVERSION_SCHEMA;
use crate::domains::conversion::{UnitKind, convert_weight, validate_conversion_request};
use crate::domains::tools::response::{error_result, success_result};

use super::ConversionRequest;

// ============================================================================
// Tool Definition
// ============================================================================

/// Weight conversion tool - converts between g, kg, oz and lb.
pub struct ConvertWeightTool;

impl ConvertWeightTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "convert_weight";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Convert between weight measurements (g, kg, oz, lb)";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(arguments: &JsonObject) -> CallToolResult {
        if let Some(message) = validate_conversion_request(arguments, UnitKind::Weight) {
            return error_result(&message);
        }

        let request = match ConversionRequest::from_arguments(arguments) {
            Ok(request) => request,
            Err(error) => return error_result(&error.to_string()),
        };

        match convert_weight(request.value, &request.from_unit, &request.to_unit) {
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
                WEIGHT_CONVERSION_SCHEMA
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
        let result = ConvertWeightTool::execute(&args(json!({
            "value": 1, "from_unit": "kg", "to_unit": "lb"
        })));
        assert!(!result.is_error.unwrap_or(true));
        assert_eq!(text_of(&result), "2.2046 lb");
    }

    #[test]
    fn test_execute_retains_trailing_zeros() {
        let result = ConvertWeightTool::execute(&args(json!({
            "value": 1, "from_unit": "lb", "to_unit": "g"
        })));
        assert_eq!(text_of(&result), "453.5920 g");
    }

    #[test]
    fn test_execute_rejects_negative_string() {
        let result = ConvertWeightTool::execute(&args(json!({
            "value": "-1", "from_unit": "g", "to_unit": "kg"
        })));
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "Value cannot be negative");
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = ConvertWeightTool::to_tool();
        assert_eq!(tool.name.as_ref(), "convert_weight");
        assert_eq!(
            tool.input_schema["properties"]["to_unit"]["enum"],
            json!(["g", "kg", "oz", "lb"])
        );
    }
}
