//! Server information tool definition.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::super::ToolDefinition;
use super::super::common::json_result;
use crate::core::config::Config;
use crate::domains::tools::{ToolContext, ToolRegistry};

/// Short description reported by the server info record.
pub const SERVER_DESCRIPTION: &str =
    "MCP server with text utilities and WireViz wire-harness diagram tools";

/// The tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetServerInfoParams {}

/// Static metadata about this server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub tools: Vec<String>,
    pub author: String,
}

impl ServerInfo {
    pub fn from_config(config: &Config) -> Self {
        Self {
            name: config.server.name.clone(),
            version: config.server.version.clone(),
            description: SERVER_DESCRIPTION.to_string(),
            tools: ToolRegistry::tool_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            author: env!("CARGO_PKG_AUTHORS").to_string(),
        }
    }
}

/// Server info tool - reports name, version and available tools.
pub struct GetServerInfoTool;

#[async_trait]
impl ToolDefinition for GetServerInfoTool {
    const NAME: &'static str = "get_server_info";
    const DESCRIPTION: &'static str =
        "Get information about this MCP server: name, version, description, tools and author.";

    type Params = GetServerInfoParams;

    async fn execute(_params: GetServerInfoParams, context: &ToolContext) -> CallToolResult {
        json_result(&ServerInfo::from_config(&context.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_info_lists_every_tool() {
        let info = ServerInfo::from_config(&Config::default());
        assert_eq!(info.name, "wireviz-mcp-server");
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(info.tools.len(), ToolRegistry::tool_names().len());
        assert!(info.tools.iter().any(|t| t == "get_server_info"));
        assert!(info.tools.iter().any(|t| t == "wireviz_create_yaml"));
    }

    #[tokio::test]
    async fn test_execute_returns_structured_record() {
        let context = ToolContext::for_tests();
        let result = GetServerInfoTool::call(Default::default(), &context)
            .await
            .unwrap();

        let structured = result.structured_content.expect("structured_content should exist");
        let info: ServerInfo = serde_json::from_value(structured).unwrap();
        assert_eq!(info, ServerInfo::from_config(&context.config));
    }
}
