//! Harness YAML assembly tool definition.
//!
//! Transcribes structured connector, cable and connection arguments into
//! WireViz markup. Nothing is checked beyond the argument shapes.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use super::super::common::{error_result, text_result};
use crate::domains::diagram::harness::Attributes;
use crate::domains::diagram::{ConnectionEntry, HarnessDocument};
use crate::domains::tools::ToolContext;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the YAML assembly tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WirevizCreateYamlParams {
    /// Connectors keyed by designator, e.g.
    /// `{"X1": {"type": "Molex KK 254", "subtype": "female", "pincount": 4,
    /// "pinlabels": ["GND", "VCC", "RX", "TX"]}}`.
    pub connectors: BTreeMap<String, Attributes>,

    /// Cables keyed by designator, e.g.
    /// `{"W1": {"wirecount": 4, "length": 1, "gauge": "0.25 mm2",
    /// "colors": ["BK", "RD", "GN", "YE"], "shield": true}}`.
    pub cables: BTreeMap<String, Attributes>,

    /// Connection sets. Each set is an ordered list of entries, each entry
    /// mapping one designator to its pins or wires, e.g.
    /// `[[{"X1": [1, 2, 3, 4]}, {"W1": [1, 2, 3, 4]}, {"X2": [1, 2, 4, 3]}]]`.
    /// Ranges such as `"1-4"` are passed through as written.
    pub connections: Vec<Vec<ConnectionEntry>>,

    /// Optional diagram options, e.g. `{"bgcolor": "WH", "fontname": "arial"}`.
    #[serde(default)]
    pub options: Option<Attributes>,

    /// Optional document metadata, e.g. `{"title": "Sensor harness"}`.
    #[serde(default)]
    pub metadata: Option<Attributes>,
}

impl From<WirevizCreateYamlParams> for HarnessDocument {
    fn from(params: WirevizCreateYamlParams) -> Self {
        Self {
            connectors: params.connectors,
            cables: params.cables,
            connections: params.connections,
            options: params.options,
            metadata: params.metadata,
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// YAML assembly tool - builds WireViz markup from structured arguments.
pub struct WirevizCreateYamlTool;

#[async_trait]
impl ToolDefinition for WirevizCreateYamlTool {
    const NAME: &'static str = "wireviz_create_yaml";
    const DESCRIPTION: &'static str = "Create a WireViz YAML harness description from \
         connectors, cables and connections. Connectors and cables are keyed by designator \
         (e.g. X1, W1); connections is a list of connection sets such as \
         [[{\"X1\": \"1-4\"}, {\"W1\": \"1-4\"}, {\"X2\": \"1-4\"}]]. The YAML is not \
         validated; pass it to wireviz_render_image, wireviz_bom or the save tools.";

    type Params = WirevizCreateYamlParams;

    #[instrument(skip_all, fields(
        connectors = params.connectors.len(),
        cables = params.cables.len(),
        connections = params.connections.len()
    ))]
    async fn execute(params: WirevizCreateYamlParams, _context: &ToolContext) -> CallToolResult {
        match HarnessDocument::from(params).to_yaml() {
            Ok(yaml) => {
                info!("Assembled harness YAML ({} bytes)", yaml.len());
                text_result(yaml)
            }
            Err(e) => error_result(&format!("Failed to serialize harness: {}", e)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
