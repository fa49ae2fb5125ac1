//! Tool-specific error types.
//!
//! Per-invocation failures never surface here: they are rendered as error
//! tool results by the engine. These are the errors of the registry itself.

use thiserror::Error;

use super::engine::SchemaError;

/// Errors that can occur while building or dispatching tools.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// A tool definition violates its schema contract.
    #[error("Invalid tool definition: {0}")]
    Schema(#[from] SchemaError),

    /// The HTTP client used by every tool could not be created.
    #[error("Failed to initialize HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }
}
