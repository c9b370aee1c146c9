//! Tool definitions module.
//!
//! Each tool is defined in its own file and implements [`ToolDefinition`]:
//! a name, a description, a typed parameter struct and an `execute` body.
//! Argument decoding and the rmcp `Tool` model are provided by the trait, so
//! every transport validates arguments the same way before a tool runs.

pub mod basic;
pub mod common;
pub mod wireviz;

use async_trait::async_trait;
use rmcp::handler::server::tool::schema_for_type;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use super::context::ToolContext;
use super::error::ToolError;

pub use basic::{CountWordsTool, EchoMessageTool, GetServerInfoTool, SayHelloTool, ServerInfo};
pub use wireviz::{
    WirevizBomTool, WirevizCreateYamlTool, WirevizRenderImageTool, WirevizSavePdfTool,
    WirevizSavePngTool,
};

/// Trait for tool definitions.
#[async_trait]
pub trait ToolDefinition: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Arguments accepted by the tool; its JSON Schema is advertised.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Run the tool on already validated parameters.
    async fn execute(params: Self::Params, context: &ToolContext) -> CallToolResult;

    /// Decode raw call arguments, then execute.
    async fn call(arguments: JsonObject, context: &ToolContext) -> Result<CallToolResult, ToolError> {
        let params: Self::Params = serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        Ok(Self::execute(params, context).await)
    }

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<Self::Params>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
