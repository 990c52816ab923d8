//! Volume conversion tool definition.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, JsonObject, Tool},
};
use tracing::{info, instrument};

use crate::domains::conversion::validation::VOLUME_CONVERSION_SCHEMA;
use crate::domains::conversion::{UnitKind, convert_volume, validate_conversion_request};
use crate::domains::tools::response::{error_result, success_result};

use super::ConversionRequest;

// ============================================================================
// Tool Definition
// ============================================================================

/// Volume conversion tool - converts between ml, l, cup, tbsp and tsp.
pub struct ConvertVolumeTool;

impl ConvertVolumeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "convert_volume";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Convert between volume measurements (ml, l, cup, tbsp, tsp)";

    /// Execute the tool logic.
    ///
    /// Arguments are schema-validated first; the converter only runs on a
    /// well-formed request, and every outcome becomes an envelope.
    #[instrument(skip_all)]
    pub fn execute(arguments: &JsonObject) -> CallToolResult {
        if let Some(message) = validate_conversion_request(arguments, UnitKind::Volume) {
            return error_result(&message);
        }

        let request = match ConversionRequest::from_arguments(arguments) {
            Ok(request) => request,
            Err(error) => return error_result(&error.to_string()),
        };

        match convert_volume(request.value, &request.from_unit, &request.to_unit) {
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
                VOLUME_CONVERSION_SCHEMA
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
