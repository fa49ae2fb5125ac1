//! Request construction: bound arguments + schema + API config -> HTTP request.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use super::binder::BoundArguments;
use super::schema::{HttpMethod, PathSegment, SchemaDescriptor};
use crate::core::config::ApiConfig;

/// Query key carrying the API credential.
pub const API_KEY_PARAM: &str = "api_key";

/// Bytes escaped in a path value. A value always stays inside its segment.
const PATH_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Bytes escaped in a query value. A value can never start a new pair.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>');

/// A fully formed outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: Option<String>,
}

impl BuiltRequest {
    /// The URL with the credential value masked, for logging.
    pub fn redacted_url(&self) -> String {
        let Some((base, query)) = self.url.split_once('?') else {
            return self.url.clone();
        };
        let pairs: Vec<String> = query
            .split('&')
            .map(|pair| match pair.split_once('=') {
                Some((API_KEY_PARAM, _)) => format!("{API_KEY_PARAM}=[REDACTED]"),
                _ => pair.to_string(),
            })
            .collect();
        format!("{}?{}", base, pairs.join("&"))
    }
}

/// Build the outbound request for a bound invocation.
///
/// Values are copied as given except for the delimiters that would move them
/// out of their path segment or query pair, which are percent-encoded. Query
/// pairs follow the schema's declaration order, with the API key appended
/// last when one is configured.
pub fn build(bound: &BoundArguments, schema: &SchemaDescriptor, api: &ApiConfig) -> BuiltRequest {
    let mut path = String::new();
    for segment in schema.template().segments() {
        match segment {
            PathSegment::Literal(text) => path.push_str(text),
            // Binding guarantees every path parameter is present.
            PathSegment::Param(key) => path.extend(utf8_percent_encode(
                bound.get(key).unwrap_or_default(),
                PATH_VALUE,
            )),
        }
    }

    let mut pairs: Vec<String> = bound
        .query()
        .map(|arg| format!("{}={}", arg.key, utf8_percent_encode(&arg.value, QUERY_VALUE)))
        .collect();
    if let Some(key) = api.api_key() {
        pairs.push(format!(
            "{API_KEY_PARAM}={}",
            utf8_percent_encode(key, QUERY_VALUE)
        ));
    }

    let query = if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    };

    BuiltRequest {
        method: schema.method(),
        url: format!("{}/{}{}", api.base_url(), path, query),
        headers: vec![("Accept", "application/json")],
        body: None,
    }
}
