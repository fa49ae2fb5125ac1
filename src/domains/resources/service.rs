//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! Resources are defined in `definitions/` and registered via `registry.rs`.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::sync::Arc;
use tracing::info;

use super::definitions::SettingsResource;
use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::core::config::ApiConfig;

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// API settings exposed by the settings resource.
    api: Arc<ApiConfig>,

    /// Registered resources, in registration order.
    resources: Vec<ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// How a resource's content is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceContent {
    /// The active API settings, rendered on each read.
    ApiSettings,
}

impl ResourceService {
    /// Create a new ResourceService over the given API settings.
    pub fn new(api: Arc<ApiConfig>) -> Self {
        info!("Initializing ResourceService");

        let resources = get_all_resources();
        for entry in &resources {
            info!("Registering resource: {}", entry.resource.raw.uri);
        }

        Self { api, resources }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .iter()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .iter()
            .find(|entry| entry.resource.raw.uri == uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let text = match entry.content {
            ResourceContent::ApiSettings => SettingsResource::render(&self.api)?,
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(key: Option<&str>) -> ResourceService {
        let api = ApiConfig::new("https://api.example.com/v4", key.map(str::to_string));
        ResourceService::new(Arc::new(api))
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let resources = service(None).list_resources().await;
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].raw.uri, "config://settings");
    }

    #[tokio::test]
    async fn test_read_settings_resource() {
        let result = service(Some("secret"))
            .read_resource("config://settings")
            .await
            .unwrap();

        match &result.contents[0] {
            ResourceContents::TextResourceContents { uri, text, .. } => {
                assert_eq!(uri, "config://settings");
                assert!(text.contains("\"api_key\": \"***\""));
                assert!(!text.contains("secret"));
            }
            other => panic!("unexpected contents: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let result = service(None).read_resource("config://missing").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
