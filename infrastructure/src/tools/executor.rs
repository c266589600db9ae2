//! Local tool executor: the concrete implementation of [`ToolExecutorPort`].
//!
//! [`LocalToolExecutor`] owns the [`ToolSpec`] it was built with together
//! with the handler of every registered tool, resolved once at construction:
//!
//! ```text
//! ToolExecutorPort::execute()
//!   ├─ unknown tool         → NOT_FOUND
//!   ├─ schema violation     → INVALID_ARGUMENT   (DefaultToolValidator)
//!   └─ handler(call)        → calculator | text_transformer | random_number_generator | word_counter
//! ```
//!
//! All four tools are pure and complete immediately, so the async and sync
//! entry points share one code path.

use assistant_application::ports::tool_executor::ToolExecutorPort;
use assistant_domain::DomainError;
use assistant_domain::tool::{
    entities::{ToolCall, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult},
};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, trace};

use super::ToolHandler;

/// Executor that runs the built-in tools in-process.
///
/// | Constructor | Tools |
/// |-------------|-------|
/// | [`new()`](Self::new) | All four built-in tools |
/// | [`with_tools()`](Self::with_tools) | Custom [`ToolSpec`] (e.g. a subset from config) |
#[derive(Debug, Clone)]
pub struct LocalToolExecutor {
    /// Available tools
    tool_spec: ToolSpec,
    /// Implementation of each tool in `tool_spec`
    handlers: HashMap<String, ToolHandler>,
}

impl LocalToolExecutor {
    /// Create a new executor with all built-in tools.
    pub fn new() -> Result<Self, DomainError> {
        Self::with_tools(super::default_tool_spec()?)
    }

    /// Create an executor with a custom tool spec.
    ///
    /// Every registered definition must name a built-in tool, otherwise
    /// [`DomainError::MissingImplementation`] is returned.
    pub fn with_tools(tool_spec: ToolSpec) -> Result<Self, DomainError> {
        let handlers = tool_spec
            .names()
            .map(|name| {
                super::handler_for(name)
                    .map(|handler| (name.to_string(), handler))
                    .ok_or_else(|| DomainError::MissingImplementation(name.to_string()))
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Self {
            tool_spec,
            handlers,
        })
    }

    /// Look up, validate and run a call.
    fn execute_internal(&self, call: &ToolCall) -> ToolResult {
        let (Some(definition), Some(handler)) = (
            self.tool_spec.get(&call.tool_name),
            self.handlers.get(&call.tool_name),
        ) else {
            return ToolResult::failure(&call.tool_name, ToolError::not_found(&call.tool_name));
        };

        if let Err(e) = DefaultToolValidator.validate(call, definition) {
            return ToolResult::failure(&call.tool_name, ToolError::invalid_argument(e));
        }

        trace!(tool = %call.tool_name, "Arguments validated");

        let result = handler(call);

        debug!(tool = %call.tool_name, status = result.status.as_str(), "Tool executed");
        result
    }
}

#[async_trait]
impl ToolExecutorPort for LocalToolExecutor {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        self.execute_internal(call)
    }

    fn execute_sync(&self, call: &ToolCall) -> ToolResult {
        self.execute_internal(call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistant_domain::tool::entities::ToolDefinition;

    fn executor() -> LocalToolExecutor {
        LocalToolExecutor::new().unwrap()
    }

    #[test]
    fn test_executor_has_all_tools_in_order() {
        let executor = executor();

        assert_eq!(
            executor.available_tools(),
            vec![
                "calculator",
                "text_transformer",
                "random_number_generator",
                "word_counter"
            ]
        );
        assert!(executor.has_tool("word_counter"));
        assert!(executor.get_tool("calculator").is_some());
    }

    #[tokio::test]
    async fn test_execute_calculator() {
        let call = ToolCall::new("calculator")
            .with_arg("operation", "divide")
            .with_arg("num1", 10)
            .with_arg("num2", 2);
        let result = executor().execute(&call).await;

        assert!(result.is_success());
        assert_eq!(result.get("result"), Some(&serde_json::json!(5.0)));
        assert_eq!(result.get("expression"), Some(&serde_json::json!("10 divide 2 = 5")));
    }

    #[tokio::test]
    async fn test_execute_text_transformer() {
        let call = ToolCall::new("text_transformer")
            .with_arg("text", "AbC")
            .with_arg("transformation", "uppercase");
        let result = executor().execute(&call).await;

        assert_eq!(result.get("transformed"), Some(&serde_json::json!("ABC")));
        assert_eq!(result.get("original"), Some(&serde_json::json!("AbC")));
    }

    #[test]
    fn test_execute_sync_word_counter() {
        let call = ToolCall::new("word_counter").with_arg("text", "");
        let result = executor().execute_sync(&call);

        assert!(result.is_success());
        assert_eq!(result.get("word_count"), Some(&serde_json::json!(0)));
        assert_eq!(result.get("sentence_count"), Some(&serde_json::json!(0)));
        assert_eq!(result.get("character_count"), Some(&serde_json::json!(0)));
    }

    #[test]
    fn test_execute_random_number() {
        let call = ToolCall::new("random_number_generator")
            .with_arg("min", 3)
            .with_arg("max", 3);
        let result = executor().execute_sync(&call);

        assert_eq!(result.get("random_number"), Some(&serde_json::json!(3)));
        assert_eq!(result.get("range"), Some(&serde_json::json!("[3, 3]")));
    }

    #[test]
    fn test_unknown_tool() {
        let result = executor().execute_sync(&ToolCall::new("modulo"));

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "NOT_FOUND");
    }

    #[test]
    fn test_enum_violation_rejected_before_execution() {
        let call = ToolCall::new("calculator")
            .with_arg("operation", "power")
            .with_arg("num1", 2)
            .with_arg("num2", 8);
        let result = executor().execute_sync(&call);

        let error = result.error().unwrap();
        assert_eq!(error.code, "INVALID_ARGUMENT");
        assert!(error.message.contains("must be one of"));
    }

    #[test]
    fn test_missing_and_unknown_parameters() {
        let missing = ToolCall::new("word_counter");
        assert!(
            executor()
                .execute_sync(&missing)
                .error()
                .unwrap()
                .message
                .contains("Missing required parameter 'text'")
        );

        let extra = ToolCall::new("word_counter")
            .with_arg("text", "hi")
            .with_arg("language", "en");
        assert!(
            executor()
                .execute_sync(&extra)
                .error()
                .unwrap()
                .message
                .contains("Unknown parameter 'language'")
        );
    }

    #[test]
    fn test_wrong_type_rejected() {
        let call = ToolCall::new("calculator")
            .with_arg("operation", "add")
            .with_arg("num1", "1")
            .with_arg("num2", 2);
        let result = executor().execute_sync(&call);

        assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");
    }

    #[test]
    fn test_definition_without_implementation_is_rejected() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("weather", "Weather lookup"))
            .unwrap();
        let err = LocalToolExecutor::with_tools(spec).unwrap_err();

        assert_eq!(err, DomainError::MissingImplementation("weather".to_string()));
    }

    #[test]
    fn test_subset_executor_hides_other_tools() {
        let spec = super::super::tool_spec_for(&["word_counter".to_string()]).unwrap();
        let executor = LocalToolExecutor::with_tools(spec).unwrap();

        assert_eq!(executor.available_tools(), vec!["word_counter"]);
        let result = executor.execute_sync(
            &ToolCall::new("calculator")
                .with_arg("operation", "add")
                .with_arg("num1", 1)
                .with_arg("num2", 1),
        );
        assert_eq!(result.error().unwrap().code, "NOT_FOUND");
    }
}
