//! Tool domain value objects: immutable result and error types
//!
//! These types form the **output side** of a tool invocation. A
//! [`ToolResult`] is either a success carrying the tool's fixed-shape
//! payload, or an error carrying a [`ToolError`]. Rendered to JSON it is the
//! object the hosting framework feeds back into the conversation:
//!
//! ```text
//! {"status": "success", "result": 5.0, "expression": "10 divide 2 = 5"}
//! {"status": "error", "error": {"code": "NOT_FOUND", "message": "..."}}
//! ```

use serde::{Deserialize, Serialize};

/// Error that occurred while dispatching a tool call.
///
/// | Code | Description |
/// |------|-------------|
/// | `INVALID_ARGUMENT` | Missing/unknown/mistyped parameter, or an input the tool rejects |
/// | `NOT_FOUND` | Unknown tool |
/// | `EXECUTION_FAILED` | The tool ran but its output could not be produced |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    /// Error code (e.g., "NOT_FOUND", "INVALID_ARGUMENT")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", format!("Tool not found: {}", resource.into()))
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new("INVALID_ARGUMENT", message)
    }

    pub fn execution_failed(message: impl Into<String>) -> Self {
        Self::new("EXECUTION_FAILED", message)
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ToolError {}

/// Outcome status reported to the framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    Success,
    Error,
}

impl ToolStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ToolStatus::Success => "success",
            ToolStatus::Error => "error",
        }
    }
}

/// Result of a tool execution.
///
/// The payload is the tool's output struct flattened into a JSON object, so
/// its shape is fixed per tool. `tool_name` is bookkeeping for logs and is
/// not part of the rendered object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Name of the tool that was executed
    #[serde(skip)]
    pub tool_name: String,
    pub status: ToolStatus,
    /// Result fields (empty for errors)
    #[serde(flatten)]
    pub payload: serde_json::Map<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolError>,
}

impl ToolResult {
    /// Create a successful result from a serializable output struct.
    ///
    /// Outputs that do not serialize to a JSON object become an
    /// `EXECUTION_FAILED` result.
    pub fn success<T: Serialize>(tool_name: impl Into<String>, output: &T) -> Self {
        let tool_name = tool_name.into();
        match serde_json::to_value(output) {
            Ok(serde_json::Value::Object(payload)) => Self {
                tool_name,
                status: ToolStatus::Success,
                payload,
                error: None,
            },
            Ok(other) => Self::failure(
                tool_name,
                ToolError::execution_failed(format!(
                    "Tool output must be an object, got {}",
                    other
                )),
            ),
            Err(e) => Self::failure(
                tool_name,
                ToolError::execution_failed(format!("Failed to serialize tool output: {}", e)),
            ),
        }
    }

    /// Create a failed result
    pub fn failure(tool_name: impl Into<String>, error: ToolError) -> Self {
        Self {
            tool_name: tool_name.into(),
            status: ToolStatus::Error,
            payload: serde_json::Map::new(),
            error: Some(error),
        }
    }

    /// Check if execution was successful
    pub fn is_success(&self) -> bool {
        self.status == ToolStatus::Success
    }

    /// Get a payload field
    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.payload.get(field)
    }

    /// Get the error
    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }

    /// Render as the JSON object handed back to the framework
    pub fn to_json(&self) -> serde_json::Value {
        let mut object = serde_json::Map::new();
        object.insert("status".to_string(), self.status.as_str().into());
        for (key, value) in &self.payload {
            object.insert(key.clone(), value.clone());
        }
        if let Some(error) = &self.error {
            object.insert(
                "error".to_string(),
                serde_json::json!({ "code": error.code, "message": error.message }),
            );
        }
        serde_json::Value::Object(object)
    }
}
