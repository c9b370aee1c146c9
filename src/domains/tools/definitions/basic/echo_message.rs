//! Echo tool definition.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;

use super::super::ToolDefinition;
use super::super::common::text_result;
use crate::domains::tools::ToolContext;

/// Prefix put in front of every echoed message.
pub const ECHO_PREFIX: &str = "Echo: ";

/// Parameters for the echo tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EchoMessageParams {
    /// The message to echo back
    pub message: String,
}

/// Echo tool - returns the message with a fixed prefix.
pub struct EchoMessageTool;

#[async_trait]
impl ToolDefinition for EchoMessageTool {
    const NAME: &'static str = "echo_message";
    const DESCRIPTION: &'static str = "Echo back a message, prefixed with 'Echo: '.";

    type Params = EchoMessageParams;

    async fn execute(params: EchoMessageParams, _context: &ToolContext) -> CallToolResult {
        text_result(format!("{}{}", ECHO_PREFIX, params.message))
    }
}
