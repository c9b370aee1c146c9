//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for STDIO/TCP transport. Every route
//! decodes arguments through the same `ToolDefinition::call` the registry
//! uses, so both dispatch paths validate identically.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
};

use super::context::ToolContext;
use super::definitions::{
    CountWordsTool, EchoMessageTool, GetServerInfoTool, SayHelloTool, ToolDefinition,
    WirevizBomTool, WirevizCreateYamlTool, WirevizRenderImageTool, WirevizSavePdfTool,
    WirevizSavePngTool,
};

/// Create a ToolRoute for one tool definition.
fn route<T, S>(context: ToolContext) -> ToolRoute<S>
where
    T: ToolDefinition,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(T::to_tool(), move |call: ToolCallContext<'_, S>| {
        let arguments = call.arguments.clone().unwrap_or_default();
        let context = context.clone();
        async move { T::call(arguments, &context).await.map_err(McpError::from) }.boxed()
    })
}

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(context: ToolContext) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(route::<SayHelloTool, S>(context.clone()))
        .with_route(route::<GetServerInfoTool, S>(context.clone()))
        .with_route(route::<EchoMessageTool, S>(context.clone()))
        .with_route(route::<CountWordsTool, S>(context.clone()))
        .with_route(route::<WirevizCreateYamlTool, S>(context.clone()))
        .with_route(route::<WirevizRenderImageTool, S>(context.clone()))
        .with_route(route::<WirevizBomTool, S>(context.clone()))
        .with_route(route::<WirevizSavePngTool, S>(context.clone()))
        .with_route(route::<WirevizSavePdfTool, S>(context))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(ToolContext::for_tests());
        let tools = router.list_all();
        assert_eq!(tools.len(), 9);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"say_hello"));
        assert!(names.contains(&"get_server_info"));
        assert!(names.contains(&"wireviz_create_yaml"));
        assert!(names.contains(&"wireviz_render_image"));
        assert!(names.contains(&"wireviz_save_png"));
    }

    #[test]
    fn test_registry_matches_router() {
        let registry_names = ToolRegistry::tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(ToolContext::for_tests());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
