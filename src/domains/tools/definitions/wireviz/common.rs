//! Pieces shared by the WireViz tools.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::super::common::{error_result, structured_result};
use crate::core::security::validate_output_path;
use crate::domains::diagram::OutputKind;
use crate::domains::tools::ToolContext;

/// Parameters for tools that write an artifact to disk.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SaveToFileParams {
    /// WireViz YAML with `connectors`, `cables` and `connections` sections,
    /// as produced by wireviz_create_yaml.
    pub yaml: String,

    /// File path the artifact is written to (overwritten if present).
    pub output_path: String,
}

/// Structured output of the save tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResult {
    pub path: String,
    pub format: OutputKind,
    pub bytes: usize,
}

/// Render `params.yaml` as `kind` and write it to `params.output_path`.
///
/// Engine and filesystem failures are returned to the caller as error
/// results carrying the original message.
pub async fn save_to_file(
    params: &SaveToFileParams,
    kind: OutputKind,
    context: &ToolContext,
) -> CallToolResult {
    let path = match validate_output_path(&params.output_path, &context.config.security) {
        Ok(p) => p,
        Err(e) => return error_result(&format!("Output path rejected: {}", e)),
    };

    let artifact = match context.engine.render(&params.yaml, kind).await {
        Ok(artifact) => artifact,
        Err(e) => return error_result(&e.to_string()),
    };

    if let Err(e) = tokio::fs::write(&path, &artifact.bytes).await {
        return error_result(&format!("Failed to write '{}': {}", path.display(), e));
    }

    let result = SaveResult {
        path: path.display().to_string(),
        format: kind,
        bytes: artifact.bytes.len(),
    };
    let summary = format!("Wrote {} ({} bytes) to {}", kind, result.bytes, result.path);
    info!("{}", summary);

    structured_result(summary, &result)
}
