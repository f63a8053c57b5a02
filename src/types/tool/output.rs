//! Tool execution result.

use super::error::ToolError;

/// Outcome of one tool invocation: the raw response JSON or an error.
#[derive(Debug, Clone)]
pub enum ToolResult {
    Success(serde_json::Value),
    Error(ToolError),
}

impl ToolResult {
    pub fn success(value: impl Into<serde_json::Value>) -> Self {
        Self::Success(value.into())
    }

    pub fn error(error: impl Into<ToolError>) -> Self {
        Self::Error(error.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::Error(ToolError::invalid_input(message))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn as_value(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Success(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// Text handed back to a model: compact JSON on success, the error
    /// message otherwise.
    pub fn text(&self) -> String {
        match self {
            Self::Success(value) => value.to_string(),
            Self::Error(e) => format!("Failed to search with Exa: {}", e),
        }
    }

    pub fn into_result(self) -> Result<serde_json::Value, ToolError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Error(e) => Err(e),
        }
    }
}

impl From<ToolError> for ToolResult {
    fn from(error: ToolError) -> Self {
        Self::Error(error)
    }
}

impl<T, E> From<Result<T, E>> for ToolResult
where
    T: Into<serde_json::Value>,
    E: Into<ToolError>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value.into()),
            Err(e) => Self::Error(e.into()),
        }
    }
}
