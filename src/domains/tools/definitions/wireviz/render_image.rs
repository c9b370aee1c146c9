//! Diagram rendering tool definition.

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use super::super::common::error_result;
use crate::domains::diagram::OutputKind;
use crate::domains::tools::ToolContext;

/// Image formats the rendering tool can return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl From<ImageFormat> for OutputKind {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Png => OutputKind::Png,
            ImageFormat::Svg => OutputKind::Svg,
        }
    }
}

/// Parameters for the rendering tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WirevizRenderImageParams {
    /// WireViz YAML with `connectors`, `cables` and `connections` sections,
    /// as produced by wireviz_create_yaml.
    pub yaml: String,

    /// Image format: "png" (default) or "svg".
    #[serde(default)]
    pub format: ImageFormat,
}

/// Rendering tool - returns the harness diagram as an image.
pub struct WirevizRenderImageTool;

#[async_trait]
impl ToolDefinition for WirevizRenderImageTool {
    const NAME: &'static str = "wireviz_render_image";
    const DESCRIPTION: &'static str = "Render a WireViz YAML harness description to a diagram \
         image. Returns a PNG image by default, or SVG when format is \"svg\". Errors reported \
         by WireViz are returned unchanged.";

    type Params = WirevizRenderImageParams;

    #[instrument(skip_all, fields(format = ?params.format))]
    async fn execute(params: WirevizRenderImageParams, context: &ToolContext) -> CallToolResult {
        let kind = OutputKind::from(params.format);
        match context.engine.render(&params.yaml, kind).await {
            Ok(artifact) => {
                info!("Rendered {} diagram ({} bytes)", kind, artifact.bytes.len());
                CallToolResult::success(vec![Content::image(
                    artifact.to_base64(),
                    kind.mime_type(),
                )])
            }
            Err(e) => error_result(&e.to_string()),
        }
    }
}
