//! WireViz MCP Server Library
//!
//! A Model Context Protocol (MCP) server that lets AI assistants describe
//! wire harnesses and render them with WireViz, next to a few plain text
//! utilities.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, output path security, the
//!   main server and the transports (STDIO, TCP, HTTP)
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools that can be executed by clients
//!   - **resources**: Read-only documents clients can fetch
//!   - **diagram**: Harness documents and the WireViz engine boundary
//!
//! # Example
//!
//! ```rust,no_run
//! use wireviz_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!     let server = McpServer::new(config.clone());
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
