//! Cooking Units MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that converts
//! cooking measurements between units, with a modular architecture
//! organized by domains.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the main server, and the transport layer
//! - **domains**: Business logic organized by bounded contexts
//!   - **conversion**: Pure unit-conversion engine, schemas, and validation
//!   - **tools**: MCP tools that execute conversions for clients
//!   - **resources**: Read-only cooking reference data
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use units_mcp_server::domains::tools::dispatch;
//!
//! let request = json!({
//!     "method": "tools/call",
//!     "params": {
//!         "name": "convert_volume",
//!         "arguments": { "value": 1000, "from_unit": "ml", "to_unit": "l" }
//!     }
//! });
//! let envelope = dispatch::handle_request(&request);
//! assert!(!envelope.is_error.unwrap_or(true));
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, McpServer, Result};
