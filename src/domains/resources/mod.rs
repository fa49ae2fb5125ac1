//! Resources domain module.
//!
//! Resources represent data that can be read by MCP clients. This server
//! exposes its active API settings as `config://settings`.
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
pub use registry::get_all_resources;
pub use service::{ResourceContent, ResourceEntry, ResourceService};
