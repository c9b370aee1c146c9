//! Engine stand-ins for tests.

use async_trait::async_trait;
use std::sync::Mutex;

use super::engine::{Artifact, DiagramEngine, OutputKind};
use super::error::EngineError;

/// Returns a fixed payload for every request and records what it was sent.
#[derive(Debug, Default)]
pub struct StubEngine {
    payload: Vec<u8>,
    calls: Mutex<Vec<(String, OutputKind)>>,
}

impl StubEngine {
    pub fn new(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: payload.into(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every `(markup, kind)` pair received so far.
    pub fn calls(&self) -> Vec<(String, OutputKind)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DiagramEngine for StubEngine {
    fn name(&self) -> &str {
        "stub"
    }

    async fn render(&self, markup: &str, kind: OutputKind) -> Result<Artifact, EngineError> {
        self.calls.lock().unwrap().push((markup.to_string(), kind));
        Ok(Artifact::new(kind, self.payload.clone()))
    }
}

/// Fails every request the way a markup error in the engine would.
#[derive(Debug, Default)]
pub struct FailingEngine;

#[async_trait]
impl DiagramEngine for FailingEngine {
    fn name(&self) -> &str {
        "failing"
    }

    async fn render(&self, _markup: &str, _kind: OutputKind) -> Result<Artifact, EngineError> {
        Err(EngineError::failed(
            Some(1),
            b"Exception: Unknown connector X3 in connection set 1",
        ))
    }
}
