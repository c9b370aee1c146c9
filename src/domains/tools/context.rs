//! Shared state handed to every tool call.

use std::sync::Arc;

use crate::core::config::Config;
use crate::domains::diagram::{DiagramEngine, WirevizCli};

/// Everything a tool may depend on, built once at startup.
#[derive(Clone)]
pub struct ToolContext {
    pub config: Arc<Config>,
    pub engine: Arc<dyn DiagramEngine>,
}

impl ToolContext {
    pub fn new(config: Arc<Config>, engine: Arc<dyn DiagramEngine>) -> Self {
        Self { config, engine }
    }

    /// Context using the WireViz executable named in the configuration.
    pub fn from_config(config: Arc<Config>) -> Self {
        let engine = Arc::new(WirevizCli::from_config(&config.engine));
        Self::new(config, engine)
    }
}

impl std::fmt::Debug for ToolContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolContext")
            .field("server", &self.config.server.name)
            .field("engine", &self.engine.name())
            .finish()
    }
}

#[cfg(test)]
impl ToolContext {
    /// Default configuration with the given engine.
    pub fn with_engine(engine: Arc<dyn DiagramEngine>) -> Self {
        Self::new(Arc::new(Config::default()), engine)
    }

    /// Default configuration with an engine that returns an empty artifact.
    pub fn for_tests() -> Self {
        Self::with_engine(Arc::new(crate::domains::diagram::testing::StubEngine::default()))
    }
}
