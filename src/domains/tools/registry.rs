//! Tool Registry - central registration and dispatch for all tools.
//!
//! The registry is built once at startup and never changes. It provides:
//! - The list of tool names and Tool models
//! - Dispatch by tool name (used by the HTTP transport)

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{instrument, warn};

use super::context::ToolContext;
use super::definitions::{
    CountWordsTool, EchoMessageTool, GetServerInfoTool, SayHelloTool, ToolDefinition,
    WirevizBomTool, WirevizCreateYamlTool, WirevizRenderImageTool, WirevizSavePdfTool,
    WirevizSavePngTool,
};
use super::error::ToolError;

/// Tool registry - manages all available tools.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    context: ToolContext,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(context: ToolContext) -> Self {
        Self { context }
    }

    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            SayHelloTool::NAME,
            GetServerInfoTool::NAME,
            EchoMessageTool::NAME,
            CountWordsTool::NAME,
            WirevizCreateYamlTool::NAME,
            WirevizRenderImageTool::NAME,
            WirevizBomTool::NAME,
            WirevizSavePngTool::NAME,
            WirevizSavePdfTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            SayHelloTool::to_tool(),
            GetServerInfoTool::to_tool(),
            EchoMessageTool::to_tool(),
            CountWordsTool::to_tool(),
            WirevizCreateYamlTool::to_tool(),
            WirevizRenderImageTool::to_tool(),
            WirevizBomTool::to_tool(),
            WirevizSavePngTool::to_tool(),
            WirevizSavePdfTool::to_tool(),
        ]
    }

    /// Dispatch a tool call by name.
    ///
    /// Arguments are validated against the tool's parameter type before the
    /// tool runs; unknown names and malformed arguments are errors.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        let context = &self.context;
        match name {
            SayHelloTool::NAME => SayHelloTool::call(arguments, context).await,
            GetServerInfoTool::NAME => GetServerInfoTool::call(arguments, context).await,
            EchoMessageTool::NAME => EchoMessageTool::call(arguments, context).await,
            CountWordsTool::NAME => CountWordsTool::call(arguments, context).await,
            WirevizCreateYamlTool::NAME => WirevizCreateYamlTool::call(arguments, context).await,
            WirevizRenderImageTool::NAME => WirevizRenderImageTool::call(arguments, context).await,
            WirevizBomTool::NAME => WirevizBomTool::call(arguments, context).await,
            WirevizSavePngTool::NAME => WirevizSavePngTool::call(arguments, context).await,
            WirevizSavePdfTool::NAME => WirevizSavePdfTool::call(arguments, context).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
