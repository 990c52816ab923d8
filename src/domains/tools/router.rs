//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for the STDIO transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its
//! own route.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{ConvertTemperatureTool, ConvertVolumeTool, ConvertWeightTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>() -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ConvertVolumeTool::create_route())
        .with_route(ConvertWeightTool::create_route())
        .with_route(ConvertTemperatureTool::create_route())
}
