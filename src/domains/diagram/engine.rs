//! The diagram engine boundary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::EngineError;

/// An artifact kind the engine can be asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// Rendered diagram as a PNG image.
    Png,
    /// Rendered diagram as an SVG image.
    Svg,
    /// Tab-separated bill of materials.
    Bom,
    /// Printable PDF document.
    Pdf,
}

impl OutputKind {
    /// MIME type of artifacts of this kind.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml",
            Self::Bom => "text/tab-separated-values",
            Self::Pdf => "application/pdf",
        }
    }

    /// Whether the artifact is text rather than binary data.
    pub fn is_text(self) -> bool {
        matches!(self, Self::Svg | Self::Bom)
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Png => "PNG",
            Self::Svg => "SVG",
            Self::Bom => "BOM",
            Self::Pdf => "PDF",
        };
        f.write_str(name)
    }
}

/// Bytes produced by the engine for one output kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: OutputKind,
    pub bytes: Vec<u8>,
}

impl Artifact {
    pub fn new(kind: OutputKind, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            kind,
            bytes: bytes.into(),
        }
    }

    /// Interpret the artifact as UTF-8 text.
    pub fn into_text(self) -> Result<String, EngineError> {
        let kind = self.kind;
        String::from_utf8(self.bytes).map_err(|_| EngineError::InvalidText {
            kind: kind.to_string(),
        })
    }

    /// Base64 encoding of the artifact, as carried in MCP image content.
    pub fn to_base64(&self) -> String {
        base64::Engine::encode(&base64::engine::general_purpose::STANDARD, &self.bytes)
    }
}

/// An external engine turning wire-harness markup into artifacts.
///
/// Implementations receive the markup exactly as the caller supplied it and
/// must not interpret it; every markup error is the engine's to report.
#[async_trait]
pub trait DiagramEngine: Send + Sync {
    /// Human readable engine name, used in logs.
    fn name(&self) -> &str;

    /// Produce one artifact of the requested kind from the markup.
    async fn render(&self, markup: &str, kind: OutputKind) -> Result<Artifact, EngineError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_types() {
        assert_eq!(OutputKind::Png.mime_type(), "image/png");
        assert_eq!(OutputKind::Svg.mime_type(), "image/svg+xml");
        assert_eq!(OutputKind::Pdf.mime_type(), "application/pdf");
        assert!(OutputKind::Bom.is_text());
        assert!(!OutputKind::Png.is_text());
    }

    #[test]
    fn test_artifact_text() {
        let artifact = Artifact::new(OutputKind::Bom, "Id\tDescription\n");
        assert_eq!(artifact.into_text().unwrap(), "Id\tDescription\n");

        let artifact = Artifact::new(OutputKind::Bom, vec![0xff, 0xfe]);
        assert!(matches!(
            artifact.into_text(),
            Err(EngineError::InvalidText { .. })
        ));
    }

    #[test]
    fn test_artifact_base64() {
        let artifact = Artifact::new(OutputKind::Png, b"\x89PNG".to_vec());
        assert_eq!(artifact.to_base64(), "iVBORw==");
        assert_eq!(artifact.bytes.len(), 4);
    }
}
