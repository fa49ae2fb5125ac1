//! Tools domain module.
//!
//! Every tool is a thin adapter over one endpoint of the Wordnik REST API.
//! The adapters share a single generic pipeline; a tool is nothing more than
//! a declarative definition fed into it.
//!
//! ## Architecture
//!
//! - `engine/` - the generic pipeline (schema, binder, request, client, decoder)
//! - `definitions/` - the endpoint catalog and its response models
//! - `registry.rs` - owns the adapters; dispatch for the HTTP transport
//! - `router.rs` - ToolRouter builder for STDIO/TCP transport
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Declare it in `definitions/word.rs` or `definitions/words.rs`
//! 2. Add it to `definitions::catalog()`
//!
//! Registry and router pick it up from the catalog.

pub mod definitions;
pub mod engine;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
