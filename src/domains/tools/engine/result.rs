//! The value every tool invocation produces.

use rmcp::model::{CallToolResult, Content};

use super::binder::BindingError;
use super::client::ClientError;

/// Outcome of one tool invocation, handed back to the MCP host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolResult {
    Success { text: String },
    Error { message: String, cause: Option<String> },
}

impl ToolResult {
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success { text: text.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            cause: None,
        }
    }

    pub fn error_with_cause(message: impl Into<String>, cause: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Text shown to the caller.
    pub fn text(&self) -> String {
        match self {
            Self::Success { text } => text.clone(),
            Self::Error {
                message,
                cause: Some(cause),
            } => format!("{message}: {cause}"),
            Self::Error {
                message,
                cause: None,
            } => message.clone(),
        }
    }

    pub fn into_call_result(self) -> CallToolResult {
        let content = vec![Content::text(self.text())];
        if self.is_error() {
            CallToolResult::error(content)
        } else {
            CallToolResult::success(content)
        }
    }
}

impl From<BindingError> for ToolResult {
    fn from(err: BindingError) -> Self {
        Self::error(err.to_string())
    }
}

impl From<ClientError> for ToolResult {
    fn from(err: ClientError) -> Self {
        Self::error_with_cause(err.to_string(), err.cause())
    }
}

impl From<ToolResult> for CallToolResult {
    fn from(result: ToolResult) -> Self {
        result.into_call_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::engine::schema::ParamLocation;
    use rmcp::model::RawContent;

    fn first_text(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn test_success_into_call_result() {
        let result = ToolResult::success("hello").into_call_result();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(first_text(&result), "hello");
    }

    #[test]
    fn test_error_text_includes_cause() {
        let result = ToolResult::error_with_cause("Request failed", "connection refused");
        assert_eq!(result.text(), "Request failed: connection refused");

        let call = result.into_call_result();
        assert_eq!(call.is_error, Some(true));
        assert_eq!(first_text(&call), "Request failed: connection refused");
    }

    #[test]
    fn test_binding_error_conversion() {
        let result = ToolResult::from(BindingError::MissingRequired {
            key: "word".to_string(),
            location: ParamLocation::Path,
        });
        assert_eq!(
            result,
            ToolResult::error("Missing required path parameter: word")
        );
    }
}
