//! Response decoding with a raw-text fallback.
//!
//! A successful body is parsed into an order-preserving [`Value`] that keeps
//! every number's original digits, and checked against the tool's typed result
//! model. When it conforms, the parsed value is pretty-printed; when it does
//! not, the body is handed back untouched. Error statuses are never parsed.

use std::any::type_name;
use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::client::RawResponse;
use super::result::ToolResult;

/// The statically expected JSON structure of a successful response.
#[derive(Clone, Copy)]
pub struct ResultShape {
    name: &'static str,
    check: fn(&Value) -> serde_json::Result<()>,
}

impl ResultShape {
    /// Shape described by a deserializable model type.
    pub fn of<T: DeserializeOwned>() -> Self {
        Self {
            name: type_name::<T>(),
            check: conforms::<T>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn check(&self, value: &Value) -> serde_json::Result<()> {
        (self.check)(value)
    }
}

impl fmt::Debug for ResultShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ResultShape").field(&self.name).finish()
    }
}

fn conforms<T: DeserializeOwned>(value: &Value) -> serde_json::Result<()> {
    T::deserialize(value).map(drop)
}

/// A successful body, either structured or passed through as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Structured(Value),
    Raw(String),
}

impl Decoded {
    /// Parse `body` and check it against `shape`.
    pub fn from_body(body: String, shape: &ResultShape) -> Self {
        match serde_json::from_str::<Value>(&body) {
            Ok(value) => match shape.check(&value) {
                Ok(()) => Self::Structured(value),
                Err(e) => {
                    debug!(shape = shape.name(), error = %e, "Response does not match result shape");
                    Self::Raw(body)
                }
            },
            Err(e) => {
                debug!(error = %e, "Response is not valid JSON");
                Self::Raw(body)
            }
        }
    }

    pub fn into_result(self) -> ToolResult {
        match self {
            Self::Structured(value) => match serde_json::to_string_pretty(&value) {
                Ok(text) => ToolResult::success(text),
                Err(e) => ToolResult::error_with_cause("Failed to format JSON", e.to_string()),
            },
            Self::Raw(body) => ToolResult::success(body),
        }
    }
}

/// Turn a raw response into a tool result.
pub fn decode(response: RawResponse, shape: &ResultShape) -> ToolResult {
    if response.status >= 400 {
        return ToolResult::error(format!("API error: {}", response.body));
    }
    Decoded::from_body(response.body, shape).into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Word {
        word: Option<String>,
        id: Option<i64>,
    }

    fn words() -> ResultShape {
        ResultShape::of::<Vec<Word>>()
    }

    #[test]
    fn test_error_status_surfaces_body_verbatim() {
        let result = decode(RawResponse::new(404, r#"{"message":"not found"}"#), &words());
        assert_eq!(
            result,
            ToolResult::error(r#"API error: {"message":"not found"}"#)
        );
    }

    #[test]
    fn test_error_status_with_non_json_body() {
        let result = decode(RawResponse::new(500, "oops"), &words());
        assert_eq!(result.text(), "API error: oops");
        assert!(result.is_error());
    }

    #[test]
    fn test_status_399_is_not_an_error() {
        let result = decode(RawResponse::new(399, "[]"), &words());
        assert_eq!(result, ToolResult::success("[]"));
    }

    #[test]
    fn test_invalid_json_falls_back_to_raw() {
        let result = decode(RawResponse::new(200, "<html>502</html>"), &words());
        assert_eq!(result, ToolResult::success("<html>502</html>"));
    }

    #[test]
    fn test_shape_mismatch_falls_back_to_raw() {
        let body = r#"{"word":"cat","id":1}"#;
        let result = decode(RawResponse::new(200, body), &words());
        assert_eq!(result, ToolResult::success(body));

        let body = r#"[{"word":"cat","id":"one"}]"#;
        let result = decode(RawResponse::new(200, body), &words());
        assert_eq!(result, ToolResult::success(body));
    }

    #[test]
    fn test_structured_pretty_print() {
        let result = decode(RawResponse::new(200, r#"[{"word":"cat","id":1}]"#), &words());
        assert_eq!(
            result,
            ToolResult::success("[\n  {\n    \"word\": \"cat\",\n    \"id\": 1\n  }\n]")
        );
    }

    #[test]
    fn test_key_order_and_unknown_fields_preserved() {
        let body = r#"[{"zeta":true,"id":7,"word":"dog","alpha":[1,2]}]"#;
        let ToolResult::Success { text } = decode(RawResponse::new(200, body), &words()) else {
            panic!("expected success");
        };
        let zeta = text.find("zeta").unwrap();
        let id = text.find("\"id\"").unwrap();
        let word = text.find("word").unwrap();
        let alpha = text.find("alpha").unwrap();
        assert!(zeta < id && id < word && word < alpha);
    }

    #[test]
    fn test_numeric_precision_preserved() {
        #[derive(Deserialize)]
        #[allow(dead_code)]
        struct Score {
            value: Option<f64>,
        }
        let shape = ResultShape::of::<Score>();
        let body = r#"{"value":0.30000000000000004,"big":9007199254740993}"#;
        let ToolResult::Success { text } = decode(RawResponse::new(200, body), &shape) else {
            panic!("expected success");
        };
        assert!(text.contains("0.30000000000000004"));
        assert!(text.contains("9007199254740993"));
    }

    #[test]
    fn test_numbers_beyond_f64_keep_their_digits() {
        let body = r#"[{"word":"cat","big":123456789012345678901234567890,"dec":0.1000000000000000000001}]"#;
        let ToolResult::Success { text } = decode(RawResponse::new(200, body), &words()) else {
            panic!("expected success");
        };
        assert!(text.contains("\"big\": 123456789012345678901234567890"));
        assert!(text.contains("\"dec\": 0.1000000000000000000001"));
    }

    #[test]
    fn test_decoded_stages() {
        let shape = words();
        assert_eq!(
            Decoded::from_body("not json".to_string(), &shape),
            Decoded::Raw("not json".to_string())
        );
        assert!(matches!(
            Decoded::from_body("[]".to_string(), &shape),
            Decoded::Structured(Value::Array(_))
        ));
    }

    #[test]
    fn test_shape_debug_names_type() {
        let debug = format!("{:?}", words());
        assert!(debug.contains("Word"));
    }
}
