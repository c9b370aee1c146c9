//! WireViz command-line engine.
//!
//! Each render writes the markup into a fresh scratch directory, runs
//! `wireviz -f <format> -o <dir> -O harness <dir>/harness.yml` and reads
//! the single requested output back. Flags follow WireViz 0.4.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, instrument, warn};

use super::engine::{Artifact, DiagramEngine, OutputKind};
use super::error::EngineError;
use crate::core::config::EngineConfig;

/// Base name for the scratch input and every generated output.
const OUTPUT_NAME: &str = "harness";

/// Diagram engine backed by the `wireviz` executable.
#[derive(Debug, Clone)]
pub struct WirevizCli {
    binary: String,
    timeout: Duration,
}

impl WirevizCli {
    pub fn new(binary: impl Into<String>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.binary.clone(), config.timeout())
    }

    /// The `-f` letter selecting an output kind.
    fn format_flag(kind: OutputKind) -> &'static str {
        match kind {
            OutputKind::Png => "p",
            OutputKind::Svg => "s",
            OutputKind::Bom => "t",
            OutputKind::Pdf => "P",
        }
    }

    /// Where WireViz writes the output for a kind inside `dir`.
    fn output_path(dir: &Path, kind: OutputKind) -> PathBuf {
        let extension = match kind {
            OutputKind::Png => "png",
            OutputKind::Svg => "svg",
            OutputKind::Bom => "bom.tsv",
            OutputKind::Pdf => "pdf",
        };
        dir.join(format!("{}.{}", OUTPUT_NAME, extension))
    }

    fn command(&self, dir: &Path, input: &Path, kind: OutputKind) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.arg("-f")
            .arg(Self::format_flag(kind))
            .arg("-o")
            .arg(dir)
            .arg("-O")
            .arg(OUTPUT_NAME)
            .arg(input)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

impl Default for WirevizCli {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

#[async_trait]
impl DiagramEngine for WirevizCli {
    fn name(&self) -> &str {
        "wireviz"
    }

    #[instrument(skip(self, markup), fields(binary = %self.binary, bytes = markup.len()))]
    async fn render(&self, markup: &str, kind: OutputKind) -> Result<Artifact, EngineError> {
        let workdir = tempfile::tempdir()?;
        let input = workdir.path().join(format!("{}.yml", OUTPUT_NAME));
        tokio::fs::write(&input, markup).await?;

        let child = self
            .command(workdir.path(), &input, kind)
            .spawn()
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => EngineError::NotInstalled {
                    binary: self.binary.clone(),
                },
                _ => EngineError::Spawn {
                    binary: self.binary.clone(),
                    source,
                },
            })?;

        // Dropping the future on timeout drops the child, which kills it.
        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| EngineError::Timeout {
                limit: self.timeout,
            })??;

        if !output.status.success() {
            warn!("wireviz exited with {}", output.status);
            return Err(EngineError::failed(output.status.code(), &output.stderr));
        }

        let path = Self::output_path(workdir.path(), kind);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(EngineError::MissingOutput {
                    kind: kind.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        debug!("wireviz produced {} bytes of {}", bytes.len(), kind);
        Ok(Artifact::new(kind, bytes))
    }
}
