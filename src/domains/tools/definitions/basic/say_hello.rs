//! Greeting tool definition.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::super::ToolDefinition;
use super::super::common::text_result;
use crate::domains::tools::ToolContext;

/// Name used when the caller does not supply one.
pub const DEFAULT_NAME: &str = "World";

/// Parameters for the greeting tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SayHelloParams {
    /// The name of the person to greet (default: 'World')
    #[serde(default)]
    pub name: Option<String>,
}

/// Greeting tool - says hello to someone.
pub struct SayHelloTool;

impl SayHelloTool {
    /// Build the greeting; an empty name is used as given.
    pub fn greet(name: Option<&str>) -> String {
        format!(
            "Hello, {}! This is a greeting from the MCP server.",
            name.unwrap_or(DEFAULT_NAME)
        )
    }
}

#[async_trait]
impl ToolDefinition for SayHelloTool {
    const NAME: &'static str = "say_hello";
    const DESCRIPTION: &'static str =
        "Say hello to someone. Returns a greeting message for the given name (default: 'World').";

    type Params = SayHelloParams;

    async fn execute(params: SayHelloParams, _context: &ToolContext) -> CallToolResult {
        info!("Greeting {:?}", params.name);
        text_result(Self::greet(params.name.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::first_text;
    use serde_json::json;

    #[test]
    fn test_greet_default_name() {
        assert_eq!(
            SayHelloTool::greet(None),
            "Hello, World! This is a greeting from the MCP server."
        );
    }

    #[test]
    fn test_greet_empty_name_is_verbatim() {
        assert_eq!(
            SayHelloTool::greet(Some("")),
            "Hello, ! This is a greeting from the MCP server."
        );
    }

    #[tokio::test]
    async fn test_call_without_arguments() {
        let context = ToolContext::for_tests();
        let result = SayHelloTool::call(Default::default(), &context).await.unwrap();
        assert_eq!(
            first_text(&result),
            "Hello, World! This is a greeting from the MCP server."
        );
    }

    #[tokio::test]
    async fn test_call_with_name() {
        let context = ToolContext::for_tests();
        let args = json!({"name": "Ada"}).as_object().cloned().unwrap();
        let result = SayHelloTool::call(args, &context).await.unwrap();
        assert_eq!(
            first_text(&result),
            "Hello, Ada! This is a greeting from the MCP server."
        );
    }

    #[tokio::test]
    async fn test_call_rejects_non_string_name() {
        let context = ToolContext::for_tests();
        let args = json!({"name": 42}).as_object().cloned().unwrap();
        assert!(SayHelloTool::call(args, &context).await.is_err());
    }
}
