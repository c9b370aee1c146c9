//! Diagram engine error types.

use thiserror::Error;

/// Errors raised while asking the engine for an artifact.
///
/// Messages carry the engine's own diagnostics so callers see exactly what
/// the engine reported.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine executable could not be found.
    #[error("Diagram engine '{binary}' is not installed or not on PATH")]
    NotInstalled { binary: String },

    /// The engine process could not be started.
    #[error("Failed to start diagram engine '{binary}': {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// The engine ran and reported a failure.
    #[error("Diagram engine failed (exit code {code:?}): {stderr}")]
    Failed { code: Option<i32>, stderr: String },

    /// The engine did not finish in time.
    #[error("Diagram engine timed out after {limit:?}")]
    Timeout { limit: std::time::Duration },

    /// The engine exited cleanly but produced no output for the request.
    #[error("Diagram engine produced no {kind} output")]
    MissingOutput { kind: String },

    /// A textual artifact was not valid UTF-8.
    #[error("Diagram engine returned non UTF-8 {kind} output")]
    InvalidText { kind: String },

    /// Scratch file handling failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Create a "failed" error from captured process output.
    pub fn failed(code: Option<i32>, stderr: &[u8]) -> Self {
        let stderr = String::from_utf8_lossy(stderr).trim().to_string();
        Self::Failed {
            code,
            stderr: if stderr.is_empty() {
                "no diagnostics on stderr".to_string()
            } else {
                stderr
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_keeps_engine_diagnostics() {
        let err = EngineError::failed(Some(1), b"  KeyError: 'X3'\n");
        assert_eq!(
            err.to_string(),
            "Diagram engine failed (exit code Some(1)): KeyError: 'X3'"
        );
    }

    #[test]
    fn test_timeout_names_the_limit() {
        let err = EngineError::Timeout {
            limit: std::time::Duration::from_millis(200),
        };
        assert_eq!(err.to_string(), "Diagram engine timed out after 200ms");
    }

    #[test]
    fn test_failed_without_stderr() {
        let err = EngineError::failed(None, b"");
        assert!(err.to_string().contains("no diagnostics"));
    }
}
