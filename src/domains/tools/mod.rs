//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are stateless functions that MCP clients call by name.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `context.rs` - Shared config and diagram engine handed to every tool
//! - `router.rs` - rmcp ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Tool listing and by-name dispatch (HTTP transport)
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` implementing `ToolDefinition`
//! 2. Export it in the parent `mod.rs`
//! 3. Add a route in `router.rs`
//! 4. Add it to `tool_names()`, `get_all_tools()` and `call_tool()` in `registry.rs`

mod context;
pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use context::ToolContext;
pub use definitions::ToolDefinition;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
