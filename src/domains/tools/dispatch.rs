//! Request dispatch - the transport-facing entry points.
//!
//! A transport decodes one JSON request object and hands it here; every
//! outcome, success or failure, comes back as a single response envelope.
//! Nothing in this module suspends, blocks, or touches shared mutable
//! state, so a transport may call it from wherever it likes.

use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use serde_json::Value;
use tracing::info;

use super::registry::ToolRegistry;
use super::response::error_result;

/// List the available tool descriptors.
pub fn list_tools() -> Vec<Tool> {
    ToolRegistry::get_all_tools()
}

/// Handle one decoded request object and produce the response envelope.
///
/// Supported methods: `tools/call` / `callTool` with
/// `params: { name, arguments }`, and `tools/list` / `listTools`, which
/// answers with the tool descriptors serialized into the envelope text.
/// Anything else becomes an error envelope naming the unrecognized method.
pub fn handle_request(request: &Value) -> CallToolResult {
    let Some(method) = request.get("method").and_then(Value::as_str) else {
        return error_result("Invalid request: missing 'method'");
    };

    match method {
        "tools/list" | "listTools" => list_tools_envelope(),
        "tools/call" | "callTool" => call_tool(request.get("params")),
        other => error_result(&format!("Unknown method: {}", other)),
    }
}

fn call_tool(params: Option<&Value>) -> CallToolResult {
    let Some(name) = params.and_then(|p| p.get("name")).and_then(Value::as_str) else {
        return error_result("Invalid request: missing tool name in 'params'");
    };

    let arguments: JsonObject = params
        .and_then(|p| p.get("arguments"))
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    info!("Calling tool: {}", name);
    ToolRegistry::call_tool(name, &arguments)
}

fn list_tools_envelope() -> CallToolResult {
    info!("Listing tools");
    let descriptors: Vec<Value> = list_tools()
        .into_iter()
        .map(|tool| {
            serde_json::json!({
                "name": tool.name,
                "description": tool.description,
                "inputSchema": tool.input_schema,
            })
        })
        .collect();

    CallToolResult::success(vec![Content::text(Value::Array(descriptors).to_string())])
}

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

    #[test]
    fn test_list_tools_returns_three_descriptors() {
        let tools = list_tools();
        assert_eq!(tools.len(), 3);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"convert_volume"));
        assert!(names.contains(&"convert_weight"));
        assert!(names.contains(&"convert_temperature"));
    }

    #[test]
    fn test_handle_call_tool_success() {
        let request = json!({
            "method": "tools/call",
            "params": {
                "name": "convert_temperature",
                "arguments": { "value": 0, "from_unit": "F", "to_unit": "C" }
            }
        });
        let result = handle_request(&request);
        assert!(!result.is_error.unwrap_or(true));
        assert_eq!(text_of(&result), "-17.7778 C");
    }

    #[test]
    fn test_handle_call_tool_accepts_camel_case_method() {
        let request = json!({
            "method": "callTool",
            "params": {
                "name": "convert_volume",
                "arguments": { "value": 1, "from_unit": "tbsp", "to_unit": "tsp" }
            }
        });
        assert_eq!(text_of(&handle_request(&request)), "3.0000 tsp");
    }

    #[test]
    fn test_handle_list_tools() {
        let result = handle_request(&json!({ "method": "listTools" }));
        assert!(!result.is_error.unwrap_or(true));

        let descriptors: Vec<Value> = serde_json::from_str(&text_of(&result)).unwrap();
        assert_eq!(descriptors.len(), 3);
        assert_eq!(descriptors[0]["name"], json!("convert_volume"));
        assert!(descriptors[0]["inputSchema"]["properties"]["value"].is_object());
    }

    #[test]
    fn test_handle_unknown_method() {
        let result = handle_request(&json!({ "method": "resources/list" }));
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "Unknown method: resources/list");
    }

    #[test]
    fn test_handle_missing_method() {
        let result = handle_request(&json!({ "params": {} }));
        assert!(result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_handle_unknown_tool() {
        let request = json!({
            "method": "tools/call",
            "params": { "name": "convert_length", "arguments": {} }
        });
        let result = handle_request(&request);
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "Unknown tool: convert_length");
    }

    #[test]
    fn test_handle_missing_tool_name() {
        let request = json!({ "method": "tools/call", "params": {} });
        let result = handle_request(&request);
        assert!(result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_validation_failure_becomes_envelope() {
        let request = json!({
            "method": "tools/call",
            "params": {
                "name": "convert_weight",
                "arguments": { "value": -5, "from_unit": "g", "to_unit": "kg" }
            }
        });
        let result = handle_request(&request);
        assert!(result.is_error.unwrap_or(false));
    }
}
