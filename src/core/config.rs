//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Base URL used when neither the environment nor the config file set one.
pub const DEFAULT_BASE_URL: &str = "https://api.wordnik.com/v4";

/// Per-request timeout used when `API_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Remote API connection settings.
    pub api: ApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl LoggingConfig {
    /// Read `MCP_LOG_LEVEL` and `MCP_LOG_TIMESTAMPS`.
    ///
    /// Kept separate from [`Config::from_env`] so logging can start before
    /// the other sources are read and report their problems.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(env: impl Fn(&str) -> Option<String>) -> Self {
        let mut logging = Self::default();
        if let Some(level) = env("MCP_LOG_LEVEL") {
            logging.level = level;
        }
        if let Some(raw) = env("MCP_LOG_TIMESTAMPS") {
            logging.with_timestamps = !raw.eq_ignore_ascii_case("false") && raw != "0";
        }
        logging
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_timestamps: true,
        }
    }
}

/// Connection settings shared by every tool.
///
/// Loaded once at startup and read-only afterwards.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    base_url: String,

    #[serde(skip_serializing)]
    api_key: Option<String>,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Contents of `~/.api/config.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfigFile {
    #[serde(rename = "baseURL")]
    pub base_url: Option<String>,

    #[serde(rename = "apiKey")]
    pub api_key: Option<String>,
}

impl ApiConfig {
    /// Build settings from a base URL and an optional key.
    ///
    /// A trailing `/` on the URL is dropped and an empty key counts as no key.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let api_key = api_key.filter(|key| !key.is_empty());
        Self {
            base_url,
            api_key,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Base URL without a trailing `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The API key, if one is configured.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Load from the environment, then `~/.api/config.json`, then defaults.
    pub fn load() -> Self {
        let file = match Self::default_file_path() {
            Some(path) => Self::read_file_or_default(&path),
            None => ApiConfigFile::default(),
        };
        Self::resolve(|name| std::env::var(name).ok(), file)
    }

    /// Location of the per-user config file.
    pub fn default_file_path() -> Option<PathBuf> {
        dirs_next::home_dir().map(|home| home.join(".api").join("config.json"))
    }

    /// Parse a config file.
    pub fn load_file(path: &Path) -> Result<ApiConfigFile> {
        let content = std::fs::read_to_string(path)?;
        let file = serde_json::from_str(&content)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?;
        Ok(file)
    }

    fn read_file_or_default(path: &Path) -> ApiConfigFile {
        match Self::load_file(path) {
            Ok(file) => {
                info!("API settings loaded from {}", path.display());
                file
            }
            Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No API config file at {}", path.display());
                ApiConfigFile::default()
            }
            Err(e) => {
                warn!("Ignoring API config file: {}", e);
                ApiConfigFile::default()
            }
        }
    }

    /// Merge the sources. Empty values fall through to the next source.
    pub fn resolve(env: impl Fn(&str) -> Option<String>, file: ApiConfigFile) -> Self {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let base_url = non_empty(env("API_BASE_URL"))
            .or_else(|| non_empty(file.base_url))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_key = non_empty(env("API_KEY")).or_else(|| non_empty(file.api_key));

        let mut config = Self::new(base_url, api_key);
        if let Some(raw) = env("API_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout_secs = secs,
                _ => warn!(
                    "Invalid API_TIMEOUT_SECS '{}', using {}s",
                    raw, DEFAULT_TIMEOUT_SECS
                ),
            }
        }
        config
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, None)
    }
}

/// Custom Debug implementation to redact the key from logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "wordnik-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, ...); API settings use `API_BASE_URL`, `API_KEY`
    /// and `API_TIMEOUT_SECS`. Problems with the API sources are logged, so
    /// start logging first (see [`LoggingConfig::from_env`]).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env();

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config.api = ApiConfig::load();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    fn file(base_url: Option<&str>, api_key: Option<&str>) -> ApiConfigFile {
        ApiConfigFile {
            base_url: base_url.map(str::to_string),
            api_key: api_key.map(str::to_string),
        }
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = ApiConfig::resolve(env(&[]), ApiConfigFile::default());
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.api_key(), None);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_env_overrides_file() {
        let config = ApiConfig::resolve(
            env(&[("API_BASE_URL", "https://env.example.com/v4"), ("API_KEY", "env-key")]),
            file(Some("https://file.example.com/v4"), Some("file-key")),
        );
        assert_eq!(config.base_url(), "https://env.example.com/v4");
        assert_eq!(config.api_key(), Some("env-key"));
    }

    #[test]
    fn test_file_used_when_env_missing_or_empty() {
        let config = ApiConfig::resolve(
            env(&[("API_KEY", "")]),
            file(Some("https://file.example.com/v4/"), Some("file-key")),
        );
        assert_eq!(config.base_url(), "https://file.example.com/v4");
        assert_eq!(config.api_key(), Some("file-key"));
    }

    #[test]
    fn test_timeout_from_env() {
        let config = ApiConfig::resolve(env(&[("API_TIMEOUT_SECS", "5")]), ApiConfigFile::default());
        assert_eq!(config.timeout_secs, 5);

        let config =
            ApiConfig::resolve(env(&[("API_TIMEOUT_SECS", "soon")]), ApiConfigFile::default());
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = ApiConfig::resolve(env(&[("API_TIMEOUT_SECS", "0")]), ApiConfigFile::default());
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_logging_from_env() {
        let logging = LoggingConfig::from_lookup(env(&[]));
        assert_eq!(logging.level, "info");
        assert!(logging.with_timestamps);

        let logging = LoggingConfig::from_lookup(env(&[
            ("MCP_LOG_LEVEL", "debug"),
            ("MCP_LOG_TIMESTAMPS", "FALSE"),
        ]));
        assert_eq!(logging.level, "debug");
        assert!(!logging.with_timestamps);
    }

    #[test]
    fn test_new_normalizes_inputs() {
        let config = ApiConfig::new("https://api.example.com/v4//", Some(String::new()));
        assert_eq!(config.base_url(), "https://api.example.com/v4");
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn test_load_file() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(
            tmp,
            r#"{{"baseURL": "https://file.example.com/v4", "apiKey": "abc"}}"#
        )
        .unwrap();

        let file = ApiConfig::load_file(tmp.path()).unwrap();
        assert_eq!(file.base_url.as_deref(), Some("https://file.example.com/v4"));
        assert_eq!(file.api_key.as_deref(), Some("abc"));
    }

    #[test]
    fn test_load_file_partial_and_invalid() {
        let mut partial = NamedTempFile::new().unwrap();
        write!(partial, r#"{{"apiKey": "abc"}}"#).unwrap();
        let file = ApiConfig::load_file(partial.path()).unwrap();
        assert!(file.base_url.is_none());

        let mut invalid = NamedTempFile::new().unwrap();
        write!(invalid, "not json").unwrap();
        assert!(matches!(
            ApiConfig::load_file(invalid.path()),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let file = ApiConfig::read_file_or_default(&dir.path().join("config.json"));
        assert!(file.base_url.is_none());
        assert!(file.api_key.is_none());
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let config = ApiConfig::new(DEFAULT_BASE_URL, Some("super_secret_key".to_string()));
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_api_key_not_serialized() {
        let config = ApiConfig::new(DEFAULT_BASE_URL, Some("super_secret_key".to_string()));
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super_secret_key"));
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server.name, "wordnik-mcp-server");
        assert_eq!(config.api.base_url(), DEFAULT_BASE_URL);
    }
}
