//! PDF export tool definition.

use async_trait::async_trait;
use rmcp::model::CallToolResult;

use super::super::ToolDefinition;
use super::common::{SaveToFileParams, save_to_file};
use crate::domains::diagram::OutputKind;
use crate::domains::tools::ToolContext;

/// PDF export tool - renders the harness document and writes it to a file.
pub struct WirevizSavePdfTool;

#[async_trait]
impl ToolDefinition for WirevizSavePdfTool {
    const NAME: &'static str = "wireviz_save_pdf";
    const DESCRIPTION: &'static str = "Render a WireViz YAML harness description to a PDF \
         document and write it to output_path. Returns the written path and size.";

    type Params = SaveToFileParams;

    async fn execute(params: SaveToFileParams, context: &ToolContext) -> CallToolResult {
        save_to_file(&params, OutputKind::Pdf, context).await
    }
}
