//! Configuration settings resource definition.

use serde_json::json;

use super::ResourceDefinition;
use crate::core::config::ApiConfig;
use crate::domains::resources::service::ResourceContent;

/// Active API settings, with the key masked (dynamic).
pub struct SettingsResource;

impl ResourceDefinition for SettingsResource {
    const URI: &'static str = "config://settings";
    const NAME: &'static str = "Configuration Settings";
    const DESCRIPTION: &'static str = "Get current configuration settings.";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::ApiSettings
    }
}

impl SettingsResource {
    /// Render the settings as indented JSON. The key itself is never included.
    pub fn render(api: &ApiConfig) -> serde_json::Result<String> {
        let settings = json!({
            "base_url": api.base_url(),
            "api_key": api.api_key().map(|_| "***"),
        });
        serde_json::to_string_pretty(&settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_metadata() {
        assert_eq!(SettingsResource::URI, "config://settings");
        assert_eq!(SettingsResource::MIME_TYPE, "application/json");
    }

    #[test]
    fn test_render_masks_key() {
        let api = ApiConfig::new("https://api.example.com/v4", Some("secret".to_string()));
        let text = SettingsResource::render(&api).unwrap();
        assert_eq!(
            text,
            "{\n  \"base_url\": \"https://api.example.com/v4\",\n  \"api_key\": \"***\"\n}"
        );
        assert!(!text.contains("secret"));
    }

    #[test]
    fn test_render_without_key() {
        let api = ApiConfig::new("https://api.example.com/v4", None);
        let value: serde_json::Value =
            serde_json::from_str(&SettingsResource::render(&api).unwrap()).unwrap();
        assert!(value["api_key"].is_null());
    }
}
