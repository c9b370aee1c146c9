//! Resource service implementation.
//!
//! The ResourceService lists registered resources and resolves their
//! content on read. Resources are registered via `registry.rs`.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::core::config::Config;
use crate::domains::tools::definitions::ServerInfo;

/// Service for listing and reading resources.
pub struct ResourceService {
    /// Server configuration, for resources derived from it.
    config: Arc<Config>,

    /// Key: resource URI. Ordered so listings are stable.
    resources: BTreeMap<String, ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(&'static str),

    /// The server info record, rendered from the current configuration.
    ServerInfo,
}

impl ResourceService {
    /// Create a new ResourceService with every registered resource.
    pub fn new(config: Arc<Config>) -> Self {
        let resources: BTreeMap<_, _> = get_all_resources()
            .into_iter()
            .map(|entry| (entry.resource.raw.uri.clone(), entry))
            .collect();
        info!("Registered {} resources", resources.len());

        Self { config, resources }
    }

    /// List all available resources.
    pub fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;
        debug!("Reading resource {}", uri);

        let text = match &entry.content {
            ResourceContent::Text(text) => text.to_string(),
            ResourceContent::ServerInfo => {
                serde_json::to_string_pretty(&ServerInfo::from_config(&self.config))
                    .map_err(|e| ResourceError::internal(e.to_string()))?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ResourceService {
        ResourceService::new(Arc::new(Config::default()))
    }

    #[test]
    fn test_lists_registered_resources() {
        let resources = service().list_resources();
        assert_eq!(resources.len(), 2);
    }

    #[test]
    fn test_read_server_info() {
        let result = service().read_resource("mcp://server/info").unwrap();
        let ResourceContents::TextResourceContents { text, .. } = &result.contents[0] else {
            panic!("Expected text contents");
        };
        let info: ServerInfo = serde_json::from_str(text).unwrap();
        assert_eq!(info.name, "wireviz-mcp-server");
        assert!(info.tools.contains(&"wireviz_bom".to_string()));
    }

    #[test]
    fn test_read_syntax_guide() {
        let result = service().read_resource("wireviz://docs/syntax").unwrap();
        assert_eq!(result.contents.len(), 1);
    }

    #[test]
    fn test_read_nonexistent_resource() {
        let result = service().read_resource("mcp://server/nonexistent");
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
