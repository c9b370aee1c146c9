//! WireViz wire-harness tools.
//!
//! - `create_yaml`: assemble a harness description into YAML markup
//! - `render_image`: render markup to a PNG or SVG image
//! - `bom`: produce the tab-separated bill of materials
//! - `save_png` / `save_pdf`: render markup straight to a file
//!
//! All markup is forwarded to the diagram engine untouched.

pub mod bom;
pub mod common;
pub mod create_yaml;
pub mod render_image;
pub mod save_pdf;
pub mod save_png;

pub use bom::{WirevizBomParams, WirevizBomTool};
pub use common::{SaveResult, SaveToFileParams};
pub use create_yaml::{WirevizCreateYamlParams, WirevizCreateYamlTool};
pub use render_image::{ImageFormat, WirevizRenderImageParams, WirevizRenderImageTool};
pub use save_pdf::WirevizSavePdfTool;
pub use save_png::WirevizSavePngTool;
