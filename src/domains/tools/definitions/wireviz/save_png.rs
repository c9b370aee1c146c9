//! PNG export tool definition.

use async_trait::async_trait;
use rmcp::model::CallToolResult;

use super::super::ToolDefinition;
use super::common::{SaveToFileParams, save_to_file};
use crate::domains::diagram::OutputKind;
use crate::domains::tools::ToolContext;

/// PNG export tool - renders the diagram and writes it to a file.
pub struct WirevizSavePngTool;

#[async_trait]
impl ToolDefinition for WirevizSavePngTool {
    const NAME: &'static str = "wireviz_save_png";
    const DESCRIPTION: &'static str = "Render a WireViz YAML harness description to a PNG \
         diagram and write it to output_path. Returns the written path and size.";

    type Params = SaveToFileParams;

    async fn execute(params: SaveToFileParams, context: &ToolContext) -> CallToolResult {
        save_to_file(&params, OutputKind::Png, context).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::domains::diagram::testing::{FailingEngine, StubEngine};
    use crate::domains::tools::definitions::common::first_text;
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_png_written_to_path() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("harness.png");
        let engine = Arc::new(StubEngine::new(b"\x89PNG\r\n".to_vec()));
        let context = ToolContext::with_engine(engine.clone());

        let params = SaveToFileParams {
            yaml: "connectors: {}".to_string(),
            output_path: target.to_string_lossy().to_string(),
        };
        let result = WirevizSavePngTool::execute(params, &context).await;

        assert_ne!(result.is_error, Some(true));
        assert_eq!(fs::read(&target).unwrap(), b"\x89PNG\r\n");
        assert_eq!(engine.calls()[0], ("connectors: {}".to_string(), OutputKind::Png));

        let structured = result.structured_content.expect("structured_content should exist");
        assert_eq!(structured["format"], "png");
        assert_eq!(structured["bytes"], 6);
    }

    #[tokio::test]
    async fn test_existing_file_overwritten() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("old.png");
        fs::write(&target, b"previous contents").unwrap();

        let context = ToolContext::with_engine(Arc::new(StubEngine::new(b"new".to_vec())));
        let params = SaveToFileParams {
            yaml: String::new(),
            output_path: target.to_string_lossy().to_string(),
        };
        WirevizSavePngTool::execute(params, &context).await;

        assert_eq!(fs::read(&target).unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_engine_failure_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("never.png");

        let context = ToolContext::with_engine(Arc::new(FailingEngine));
        let params = SaveToFileParams {
            yaml: "bad".to_string(),
            output_path: target.to_string_lossy().to_string(),
        };
        let result = WirevizSavePngTool::execute(params, &context).await;

        assert_eq!(result.is_error, Some(true));
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn test_missing_parent_rejected_before_render() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("no_such_dir").join("out.png");

        let engine = Arc::new(StubEngine::new("png"));
        let context = ToolContext::with_engine(engine.clone());
        let params = SaveToFileParams {
            yaml: String::new(),
            output_path: target.to_string_lossy().to_string(),
        };
        let result = WirevizSavePngTool::execute(params, &context).await;

        assert_eq!(result.is_error, Some(true));
        assert!(first_text(&result).contains("Parent directory does not exist"));
        assert!(engine.calls().is_empty());
    }

    #[tokio::test]
    async fn test_path_outside_root_rejected_before_render() {
        let root_dir = TempDir::new().unwrap();
        let outside_dir = TempDir::new().unwrap();

        let mut config = Config::default();
        config.security.root_path = Some(root_dir.path().to_path_buf());
        let engine = Arc::new(StubEngine::new(b"png".to_vec()));
        let context = ToolContext::new(Arc::new(config), engine.clone());

        let params = SaveToFileParams {
            yaml: String::new(),
            output_path: outside_dir
                .path()
                .join("escape.png")
                .to_string_lossy()
                .to_string(),
        };
        let result = WirevizSavePngTool::execute(params, &context).await;

        assert_eq!(result.is_error, Some(true));
        assert!(engine.calls().is_empty());
    }
}
