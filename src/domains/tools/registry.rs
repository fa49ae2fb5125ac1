//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - One [`ToolAdapter`] per catalog entry, sharing a single HTTP client
//! - Dispatch by tool name (used by the HTTP transport)
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;
use tracing::{info, warn};

use super::definitions::catalog;
use super::engine::{ApiClient, ReqwestApiClient, ToolAdapter};
use super::error::ToolError;
use crate::core::config::ApiConfig;

/// Tool registry - owns every tool adapter.
///
/// Adapters are immutable after construction, so the registry can be shared
/// across tasks behind an `Arc` and serve concurrent calls.
#[derive(Debug)]
pub struct ToolRegistry {
    tools: Vec<Arc<ToolAdapter>>,
}

impl ToolRegistry {
    /// Create the registry with a `reqwest` client built from the API settings.
    pub fn new(api: Arc<ApiConfig>) -> Result<Self, ToolError> {
        let client = ReqwestApiClient::new(&api)?;
        Self::with_client(api, Arc::new(client))
    }

    /// Create the registry over an arbitrary [`ApiClient`].
    pub fn with_client(api: Arc<ApiConfig>, client: Arc<dyn ApiClient>) -> Result<Self, ToolError> {
        let tools = catalog()?
            .into_iter()
            .map(|definition| Arc::new(ToolAdapter::new(definition, api.clone(), client.clone())))
            .collect::<Vec<_>>();

        info!("Registered {} tools", tools.len());
        Ok(Self { tools })
    }

    /// All adapters, in registration order.
    pub fn tools(&self) -> &[Arc<ToolAdapter>] {
        &self.tools
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools.iter().map(|tool| tool.to_tool()).collect()
    }

    /// Look up an adapter by name.
    pub fn get(&self, name: &str) -> Option<&Arc<ToolAdapter>> {
        self.tools.iter().find(|tool| tool.name() == name)
    }

    /// Dispatch a tool call by name.
    ///
    /// Only an unknown name is an `Err`; failures inside the tool come back
    /// as an error [`CallToolResult`].
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<CallToolResult, ToolError> {
        let Some(tool) = self.get(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };
        Ok(tool.invoke(&arguments).await.into_call_result())
    }
}
