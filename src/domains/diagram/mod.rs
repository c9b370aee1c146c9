//! Diagram domain module.
//!
//! This module is the boundary to the external wire-harness diagram engine.
//! The engine owns all parsing, layout and rendering of the markup; this
//! crate only assembles markup documents and forwards them.
//!
//! ## Architecture
//!
//! - `engine.rs` - The `DiagramEngine` trait, output kinds and artifacts
//! - `wireviz_cli.rs` - Production engine driving the `wireviz` executable
//! - `harness.rs` - Typed harness description and its YAML serialization
//! - `error.rs` - Engine error types

mod engine;
mod error;
pub mod harness;
mod wireviz_cli;

#[cfg(test)]
pub mod testing;

pub use engine::{Artifact, DiagramEngine, OutputKind};
pub use error::EngineError;
pub use harness::{ConnectionEntry, HarnessDocument};
pub use wireviz_cli::WirevizCli;
