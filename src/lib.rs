//! Wordnik MCP Server Library
//!
//! A Model Context Protocol (MCP) server that exposes sixteen endpoints of
//! the Wordnik dictionary API as tools. Every tool is a declarative
//! definition run through one shared pipeline: bind the caller's arguments
//! against the tool's schema, build the request, execute it, and decode the
//! response.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and its transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the adapter engine and the endpoint catalog
//!   - **resources**: read-only data (the active API settings)
//!
//! # Example
//!
//! ```rust,no_run
//! use wordnik_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
