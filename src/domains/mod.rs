//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: MCP tools that can be executed by clients
//! - **resources**: Read-only documents that can be fetched by clients
//! - **diagram**: The boundary to the external wire-harness diagram engine

pub mod diagram;
pub mod resources;
pub mod tools;
