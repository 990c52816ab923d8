//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of the three conversion tools
//! - Name-based dispatch for decoded request objects
//! - Tool metadata for listing

use rmcp::model::{CallToolResult, JsonObject, Tool};

use super::definitions::{ConvertTemperatureTool, ConvertVolumeTool, ConvertWeightTool};
use super::response::error_result;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// The tool set is fixed at compile time and carries no state, so the
/// registry is a namespace of associated functions.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            ConvertVolumeTool::NAME,
            ConvertWeightTool::NAME,
            ConvertTemperatureTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools. Both
    /// transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            ConvertVolumeTool::to_tool(),
            ConvertWeightTool::to_tool(),
            ConvertTemperatureTool::to_tool(),
        ]
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// Unknown tool names come back as an error envelope, not a fault.
    pub fn call_tool(name: &str, arguments: &JsonObject) -> CallToolResult {
        match name {
            ConvertVolumeTool::NAME => ConvertVolumeTool::execute(arguments),
            ConvertWeightTool::NAME => ConvertWeightTool::execute(arguments),
            ConvertTemperatureTool::NAME => ConvertTemperatureTool::execute(arguments),
            _ => error_result(&format!("Unknown tool: {}", name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 3);
        assert!(names.contains(&"convert_volume"));
        assert!(names.contains(&"convert_weight"));
        assert!(names.contains(&"convert_temperature"));
    }

    #[test]
    fn test_registry_call_volume() {
        let args = json!({ "value": 1000, "from_unit": "ml", "to_unit": "l" });
        let result = ToolRegistry::call_tool("convert_volume", args.as_object().unwrap());
        assert!(!result.is_error.unwrap_or(true));
    }

    #[test]
    fn test_registry_call_unknown() {
        let result = ToolRegistry::call_tool("unknown", &JsonObject::new());
        assert!(result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_descriptors_are_stable_across_calls() {
        let first: Vec<String> = ToolRegistry::get_all_tools()
            .iter()
            .map(|t| t.name.to_string())
            .collect();
        let args = json!({ "value": 1, "from_unit": "g", "to_unit": "oz" });
        ToolRegistry::call_tool("convert_weight", args.as_object().unwrap());
        let second: Vec<String> = ToolRegistry::get_all_tools()
            .iter()
            .map(|t| t.name.to_string())
            .collect();
        assert_eq!(first, second);
    }
}
