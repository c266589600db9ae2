//! Domain error types

use thiserror::Error;

/// Domain-level errors raised while assembling tool registries and agents.
///
/// Tool *execution* never produces a `DomainError`; failures at call time are
/// reported as [`ToolError`](crate::tool::ToolError) values inside a result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Tool '{0}' is already registered")]
    DuplicateTool(String),

    #[error("Parameter '{parameter}' is declared more than once on tool '{tool}'")]
    DuplicateParameter { tool: String, parameter: String },

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Tool '{0}' has no implementation")]
    MissingImplementation(String),

    #[error("Invalid agent descriptor: {0}")]
    InvalidAgent(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_tool_display() {
        let error = DomainError::DuplicateTool("calculator".to_string());
        assert_eq!(error.to_string(), "Tool 'calculator' is already registered");
    }

    #[test]
    fn test_duplicate_parameter_display() {
        let error = DomainError::DuplicateParameter {
            tool: "calculator".to_string(),
            parameter: "num1".to_string(),
        };
        assert!(error.to_string().contains("'num1'"));
        assert!(error.to_string().contains("'calculator'"));
    }

    #[test]
    fn test_missing_implementation_display() {
        let error = DomainError::MissingImplementation("weather".to_string());
        assert_eq!(error.to_string(), "Tool 'weather' has no implementation");
    }
}
