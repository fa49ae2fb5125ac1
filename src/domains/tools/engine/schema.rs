//! Schema descriptors for the tools exposed by the server.
//!
//! A [`SchemaDescriptor`] is the declarative side of a tool: its name,
//! description, HTTP method, the path template of the remote endpoint and the
//! ordered list of parameters it accepts. Descriptors are validated once when
//! they are constructed; everything downstream (binding, request building,
//! discovery) can rely on the invariants checked here.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use rmcp::model::JsonObject;
use serde_json::{Value, json};
use thiserror::Error;

/// Coarse value kinds a parameter may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
    Boolean,
    Array,
}

impl ParamKind {
    /// JSON Schema type name for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
        }
    }
}

/// Where a bound parameter ends up in the outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    Path,
    Query,
}

/// HTTP method of a tool's endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
        }
    }
}

/// A single declared parameter of a tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    pub key: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub description: &'static str,
    pub location: ParamLocation,
}

impl ParameterSpec {
    /// A required string parameter substituted into the path template.
    pub const fn path(key: &'static str, description: &'static str) -> Self {
        Self {
            key,
            kind: ParamKind::String,
            required: true,
            description,
            location: ParamLocation::Path,
        }
    }

    /// An optional query-string parameter.
    pub const fn query(key: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            key,
            kind,
            required: false,
            description,
            location: ParamLocation::Query,
        }
    }

    /// Mark this parameter as required.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// One piece of a parsed path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Literal(String),
    Param(String),
}

/// A parsed endpoint path such as `word.json/{word}/definitions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    raw: &'static str,
    segments: Vec<PathSegment>,
}

impl PathTemplate {
    /// Parse a template, splitting it into literal text and `{name}` placeholders.
    pub fn parse(raw: &'static str) -> Result<Self, SchemaError> {
        let mut segments = Vec::new();
        let mut rest = raw;

        while let Some(open) = rest.find('{') {
            if open > 0 {
                segments.push(PathSegment::Literal(rest[..open].to_string()));
            }
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or_else(|| SchemaError::MalformedTemplate(raw.to_string()))?;
            let name = &after[..close];
            if name.is_empty() || name.contains('{') {
                return Err(SchemaError::MalformedTemplate(raw.to_string()));
            }
            segments.push(PathSegment::Param(name.to_string()));
            rest = &after[close + 1..];
        }

        if rest.contains('}') {
            return Err(SchemaError::MalformedTemplate(raw.to_string()));
        }
        if !rest.is_empty() {
            segments.push(PathSegment::Literal(rest.to_string()));
        }

        Ok(Self { raw, segments })
    }

    pub fn as_str(&self) -> &'static str {
        self.raw
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Placeholder names in template order.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            PathSegment::Param(name) => Some(name.as_str()),
            PathSegment::Literal(_) => None,
        })
    }
}

/// Contract violations detected while building a [`SchemaDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("malformed path template: {0}")]
    MalformedTemplate(String),

    #[error("tool '{tool}' declares parameter '{key}' more than once")]
    DuplicateParameter { tool: String, key: String },

    #[error("tool '{tool}' references '{{{key}}}' more than once in its path template")]
    RepeatedPlaceholder { tool: String, key: String },

    #[error("tool '{tool}' has placeholder '{{{key}}}' without a matching path parameter")]
    UnboundPlaceholder { tool: String, key: String },

    #[error("tool '{tool}' declares path parameter '{key}' that its template never uses")]
    UnusedPathParameter { tool: String, key: String },

    #[error("tool '{tool}' path parameter '{key}' must be a required string")]
    InvalidPathParameter { tool: String, key: String },
}

/// Immutable description of one tool.
#[derive(Debug, Clone)]
pub struct SchemaDescriptor {
    name: &'static str,
    description: &'static str,
    method: HttpMethod,
    template: PathTemplate,
    parameters: Vec<ParameterSpec>,
}

impl SchemaDescriptor {
    /// Validate and build a descriptor.
    pub fn new(
        name: &'static str,
        description: &'static str,
        method: HttpMethod,
        path: &'static str,
        parameters: Vec<ParameterSpec>,
    ) -> Result<Self, SchemaError> {
        let template = PathTemplate::parse(path)?;
        let tool = || name.to_string();

        let mut keys = HashSet::new();
        for param in &parameters {
            if !keys.insert(param.key) {
                return Err(SchemaError::DuplicateParameter {
                    tool: tool(),
                    key: param.key.to_string(),
                });
            }
        }

        let mut placeholders = HashSet::new();
        for placeholder in template.placeholders() {
            if !placeholders.insert(placeholder) {
                return Err(SchemaError::RepeatedPlaceholder {
                    tool: tool(),
                    key: placeholder.to_string(),
                });
            }
            let bound = parameters
                .iter()
                .any(|p| p.key == placeholder && p.location == ParamLocation::Path);
            if !bound {
                return Err(SchemaError::UnboundPlaceholder {
                    tool: tool(),
                    key: placeholder.to_string(),
                });
            }
        }

        for param in parameters.iter().filter(|p| p.location == ParamLocation::Path) {
            if !placeholders.contains(param.key) {
                return Err(SchemaError::UnusedPathParameter {
                    tool: tool(),
                    key: param.key.to_string(),
                });
            }
            if !param.required || param.kind != ParamKind::String {
                return Err(SchemaError::InvalidPathParameter {
                    tool: tool(),
                    key: param.key.to_string(),
                });
            }
        }

        Ok(Self {
            name,
            description,
            method,
            template,
            parameters,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn template(&self) -> &PathTemplate {
        &self.template
    }

    /// Parameters in declaration order.
    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    pub fn parameter(&self, key: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.key == key)
    }

    /// JSON Schema for the tool's input, as advertised to MCP clients.
    pub fn input_schema(&self) -> Arc<JsonObject> {
        let mut properties = serde_json::Map::new();
        for param in &self.parameters {
            let mut property = json!({
                "type": param.kind.as_str(),
                "description": param.description,
            });
            if param.kind == ParamKind::Array {
                property["items"] = json!({ "type": "string" });
            }
            properties.insert(param.key.to_string(), property);
        }

        let required: Vec<Value> = self
            .parameters
            .iter()
            .filter(|p| p.required)
            .map(|p| Value::from(p.key))
            .collect();

        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), Value::from("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".to_string(), Value::Array(required));
        }
        Arc::new(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definitions_schema() -> SchemaDescriptor {
        SchemaDescriptor::new(
            "get_word_json_word_definitions",
            "Return definitions for a word",
            HttpMethod::Get,
            "word.json/{word}/definitions",
            vec![
                ParameterSpec::path("word", "Word to return definitions for"),
                ParameterSpec::query("limit", ParamKind::Number, "Maximum number of results"),
                ParameterSpec::query("sourceDictionaries", ParamKind::Array, "Sources"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_parse_template_segments() {
        let template = PathTemplate::parse("words.json/search/{query}").unwrap();
        assert_eq!(
            template.segments(),
            &[
                PathSegment::Literal("words.json/search/".to_string()),
                PathSegment::Param("query".to_string()),
            ]
        );
        assert_eq!(template.placeholders().collect::<Vec<_>>(), vec!["query"]);
    }

    #[test]
    fn test_parse_template_without_placeholders() {
        let template = PathTemplate::parse("words.json/randomWord").unwrap();
        assert_eq!(template.placeholders().count(), 0);
        assert_eq!(template.as_str(), "words.json/randomWord");
    }

    #[test]
    fn test_parse_malformed_templates() {
        assert!(PathTemplate::parse("word.json/{word/definitions").is_err());
        assert!(PathTemplate::parse("word.json/{}/definitions").is_err());
        assert!(PathTemplate::parse("word.json/word}/definitions").is_err());
    }

    #[test]
    fn test_valid_descriptor() {
        let schema = definitions_schema();
        assert_eq!(schema.name(), "get_word_json_word_definitions");
        assert_eq!(schema.method(), HttpMethod::Get);
        assert_eq!(schema.parameters().len(), 3);
        assert!(schema.parameter("word").unwrap().required);
        assert!(schema.parameter("missing").is_none());
    }

    #[test]
    fn test_duplicate_parameter_rejected() {
        let err = SchemaDescriptor::new(
            "dup",
            "",
            HttpMethod::Get,
            "words.json/randomWord",
            vec![
                ParameterSpec::query("limit", ParamKind::Number, ""),
                ParameterSpec::query("limit", ParamKind::String, ""),
            ],
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateParameter { .. }));
    }

    #[test]
    fn test_placeholder_needs_path_parameter() {
        let err = SchemaDescriptor::new(
            "unbound",
            "",
            HttpMethod::Get,
            "word.json/{word}/audio",
            vec![ParameterSpec::query("word", ParamKind::String, "")],
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::UnboundPlaceholder { .. }));
    }

    #[test]
    fn test_repeated_placeholder_rejected() {
        let err = SchemaDescriptor::new(
            "repeat",
            "",
            HttpMethod::Get,
            "word.json/{word}/{word}",
            vec![ParameterSpec::path("word", "")],
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::RepeatedPlaceholder { .. }));
    }

    #[test]
    fn test_unused_path_parameter_rejected() {
        let err = SchemaDescriptor::new(
            "unused",
            "",
            HttpMethod::Get,
            "words.json/randomWord",
            vec![ParameterSpec::path("word", "")],
        )
        .unwrap_err();
        assert!(matches!(err, SchemaError::UnusedPathParameter { .. }));
    }

    #[test]
    fn test_optional_path_parameter_rejected() {
        let mut param = ParameterSpec::path("word", "");
        param.required = false;
        let err = SchemaDescriptor::new("optional", "", HttpMethod::Get, "w/{word}", vec![param])
            .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidPathParameter { .. }));
    }

    #[test]
    fn test_input_schema_shape() {
        let schema = definitions_schema().input_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["word"]["type"], "string");
        assert_eq!(schema["properties"]["limit"]["type"], "number");
        assert_eq!(schema["properties"]["sourceDictionaries"]["items"]["type"], "string");
        assert_eq!(schema["required"], json!(["word"]));

        let keys: Vec<_> = schema["properties"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["word", "limit", "sourceDictionaries"]);
    }

    #[test]
    fn test_input_schema_omits_empty_required() {
        let schema = SchemaDescriptor::new(
            "wotd",
            "",
            HttpMethod::Get,
            "words.json/wordOfTheDay",
            vec![ParameterSpec::query("date", ParamKind::String, "")],
        )
        .unwrap()
        .input_schema();
        assert!(schema.get("required").is_none());
    }
}
