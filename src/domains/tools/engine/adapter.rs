//! Tool adapter: bind -> build -> execute -> decode.

use std::sync::Arc;

use rmcp::model::Tool;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::binder::bind;
use super::client::ApiClient;
use super::decoder::{ResultShape, decode};
use super::request::build;
use super::result::ToolResult;
use super::schema::SchemaDescriptor;
use crate::core::config::ApiConfig;

/// Static description of one endpoint: its schema and expected result shape.
#[derive(Debug, Clone)]
pub struct ToolDefinition {
    pub schema: SchemaDescriptor,
    pub shape: ResultShape,
}

impl ToolDefinition {
    pub fn new(schema: SchemaDescriptor, shape: ResultShape) -> Self {
        Self { schema, shape }
    }
}

/// A callable tool bound to one [`ToolDefinition`].
///
/// Adapters hold no per-call state, so a single instance can serve any number
/// of concurrent invocations.
pub struct ToolAdapter {
    definition: ToolDefinition,
    api: Arc<ApiConfig>,
    client: Arc<dyn ApiClient>,
}

impl ToolAdapter {
    pub fn new(definition: ToolDefinition, api: Arc<ApiConfig>, client: Arc<dyn ApiClient>) -> Self {
        Self {
            definition,
            api,
            client,
        }
    }

    pub fn name(&self) -> &'static str {
        self.definition.schema.name()
    }

    pub fn schema(&self) -> &SchemaDescriptor {
        &self.definition.schema
    }

    pub fn shape(&self) -> &ResultShape {
        &self.definition.shape
    }

    /// MCP tool metadata for discovery.
    pub fn to_tool(&self) -> Tool {
        let schema = self.schema();
        Tool {
            name: schema.name().into(),
            description: Some(schema.description().into()),
            input_schema: schema.input_schema(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Run one invocation. Every failure is reported as [`ToolResult::Error`].
    #[instrument(skip_all, fields(tool = self.name()))]
    pub async fn invoke(&self, arguments: &Value) -> ToolResult {
        info!("Invoking tool");

        let bound = match bind(arguments, self.schema()) {
            Ok(bound) => bound,
            Err(e) => {
                warn!("Argument binding failed: {}", e);
                return e.into();
            }
        };

        let request = build(&bound, self.schema(), &self.api);
        debug!(method = %request.method, url = %request.redacted_url(), "Sending request");

        let response = match self.client.execute(&request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("{}: {}", e, e.cause());
                return e.into();
            }
        };

        if response.status >= 400 {
            warn!(status = response.status, "Remote API returned an error");
        }
        decode(response, self.shape())
    }
}

impl std::fmt::Debug for ToolAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolAdapter")
            .field("name", &self.name())
            .field("shape", &self.definition.shape)
            .finish()
    }
}
