//! Bill of materials tool definition.

use async_trait::async_trait;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::instrument;

use super::super::ToolDefinition;
use super::super::common::{error_result, text_result};
use crate::domains::diagram::OutputKind;
use crate::domains::tools::ToolContext;

/// Parameters for the BOM tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WirevizBomParams {
    /// WireViz YAML with `connectors`, `cables` and `connections` sections,
    /// as produced by wireviz_create_yaml.
    pub yaml: String,
}

/// BOM tool - returns the tab-separated bill of materials.
pub struct WirevizBomTool;

#[async_trait]
impl ToolDefinition for WirevizBomTool {
    const NAME: &'static str = "wireviz_bom";
    const DESCRIPTION: &'static str = "Generate the bill of materials for a WireViz YAML harness \
         description. Returns the BOM as tab-separated values, one part per line.";

    type Params = WirevizBomParams;

    #[instrument(skip_all)]
    async fn execute(params: WirevizBomParams, context: &ToolContext) -> CallToolResult {
        let text = context
            .engine
            .render(&params.yaml, OutputKind::Bom)
            .await
            .and_then(|artifact| artifact.into_text());

        match text {
            Ok(tsv) => text_result(tsv),
            Err(e) => error_result(&e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::diagram::testing::{FailingEngine, StubEngine};
    use crate::domains::tools::definitions::common::first_text;
    use std::sync::Arc;

    const BOM: &str = "Id\tDescription\tQty\tUnit\tDesignators\n\
                       1\tConnector, Molex KK 254, female, 4 pins\t2\t\tX1, X2\n";

    #[tokio::test]
    async fn test_bom_text_passed_through() {
        let engine = Arc::new(StubEngine::new(BOM.as_bytes().to_vec()));
        let context = ToolContext::with_engine(engine.clone());

        let params = WirevizBomParams {
            yaml: "connectors: {X1: {pincount: 4}}".to_string(),
        };
        let result = WirevizBomTool::execute(params, &context).await;

        assert_eq!(first_text(&result), BOM);
        assert_eq!(
            engine.calls(),
            vec![("connectors: {X1: {pincount: 4}}".to_string(), OutputKind::Bom)]
        );
    }

    #[tokio::test]
    async fn test_non_utf8_bom_is_an_error() {
        let context = ToolContext::with_engine(Arc::new(StubEngine::new(vec![0xff, 0x00])));
        let params = WirevizBomParams {
            yaml: String::new(),
        };
        let result = WirevizBomTool::execute(params, &context).await;
        assert_eq!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_engine_error_propagates() {
        let context = ToolContext::with_engine(Arc::new(FailingEngine));
        let params = WirevizBomParams {
            yaml: "bad".to_string(),
        };
        let result = WirevizBomTool::execute(params, &context).await;
        assert_eq!(result.is_error, Some(true));
        assert!(first_text(&result).starts_with("Diagram engine failed"));
    }
}
