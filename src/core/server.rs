//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools and resources domains.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines its parameter type and an `execute()` method. Tools are
//! reachable two ways, both sharing the same `ToolContext`:
//! - the rmcp `ToolRouter` built in `domains/tools/router.rs` (STDIO/TCP)
//! - the `ToolRegistry` dispatch in `domains/tools/registry.rs` (HTTP)

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::diagram::DiagramEngine;
use crate::domains::resources::{ResourceError, ResourceService};
use crate::domains::tools::{ToolContext, ToolError, ToolRegistry, build_tool_router};

/// Instructions advertised to clients on initialization.
pub const SERVER_INSTRUCTIONS: &str = "Wire-harness documentation server backed by WireViz. \
Use wireviz_create_yaml to turn connectors, cables and connections into WireViz YAML, then \
wireviz_render_image, wireviz_bom, wireviz_save_png or wireviz_save_pdf to render it. \
The wireviz://docs/syntax resource describes the markup.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between the domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatch by tool name for the HTTP transport.
    tool_registry: ToolRegistry,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server rendering through the configured WireViz
    /// executable.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        Self::from_context(ToolContext::from_config(config))
    }

    /// Create a new MCP server rendering through the given engine.
    pub fn with_engine(config: Config, engine: Arc<dyn DiagramEngine>) -> Self {
        Self::from_context(ToolContext::new(Arc::new(config), engine))
    }

    fn from_context(context: ToolContext) -> Self {
        let config = context.config.clone();
        info!(
            "Using diagram engine '{}' ({})",
            context.engine.name(),
            config.engine.binary
        );

        Self {
            resource_service: Arc::new(ResourceService::new(config.clone())),
            tool_router: build_tool_router::<Self>(context.clone()),
            tool_registry: ToolRegistry::new(context),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// `arguments` must be a JSON object or null.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        let arguments = match arguments {
            serde_json::Value::Object(map) => map,
            serde_json::Value::Null => JsonObject::new(),
            other => {
                return Err(ToolError::invalid_arguments(format!(
                    "arguments must be an object, got {}",
                    other
                )));
            }
        };
        self.tool_registry.call_tool(name, arguments).await
    }

    /// List all available resources (for HTTP transport).
    pub fn list_resources(&self) -> Vec<Resource> {
        self.resource_service.list_resources()
    }

    /// Read a resource by URI (for HTTP transport).
    pub fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        self.resource_service.read_resource(uri)
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        Ok(ListResourcesResult {
            resources: self.resource_service.list_resources(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .map_err(|e| match e {
                ResourceError::NotFound(_) => McpError::resource_not_found(e.to_string(), None),
                ResourceError::Internal(_) => McpError::internal_error(e.to_string(), None),
            })
    }
}
