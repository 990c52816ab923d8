//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! The three conversion tools are executable functions that MCP clients
//! call to convert cooking measurements.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Dynamic ToolRouter builder for the STDIO transport
//! - `registry.rs` - Central tool registry and name-based dispatch
//! - `dispatch.rs` - Pure request-object entry points for thin transports
//! - `response.rs` - Success/error envelope builders
//! - `error.rs` - Tool-specific error types

pub mod definitions;
pub mod dispatch;
mod error;
mod registry;
mod response;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use response::{error_result, success_result};
pub use router::build_tool_router;
