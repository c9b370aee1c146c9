//! Resources domain module.
//!
//! Resources are read-only documents clients can fetch by URI: the server
//! info record and a quick reference for the harness markup the WireViz
//! tools accept.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use service::{ResourceContent, ResourceEntry, ResourceService};
