//! Output formatter trait

use crate::cli::commands::OutputFormat;
use crate::output::console::ConsoleFormatter;
use assistant_application::{AgentManifest, ToolSchemaPort};
use assistant_domain::{ToolResult, ToolSpec};
use std::sync::Arc;

/// Trait for formatting command output
pub trait OutputFormatter {
    /// Format the outcome of one tool call
    fn format_result(&self, result: &ToolResult) -> String;

    /// Format the agent registration manifest
    fn format_manifest(&self, manifest: &AgentManifest) -> String;

    /// Format the registered tool catalogue
    fn format_tools(&self, tools: &ToolSpec) -> String;
}

/// Pick the formatter for `--output`
pub fn formatter_for(
    format: OutputFormat,
    tool_schema: Arc<dyn ToolSchemaPort>,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter::new(tool_schema)),
    }
}

/// Pretty-printed JSON, identical in shape to what the framework receives
pub struct JsonFormatter {
    tool_schema: Arc<dyn ToolSchemaPort>,
}

impl JsonFormatter {
    pub fn new(tool_schema: Arc<dyn ToolSchemaPort>) -> Self {
        Self { tool_schema }
    }

    fn pretty(value: &impl serde::Serialize) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_result(&self, result: &ToolResult) -> String {
        Self::pretty(&result.to_json())
    }

    fn format_manifest(&self, manifest: &AgentManifest) -> String {
        Self::pretty(manifest)
    }

    fn format_tools(&self, tools: &ToolSpec) -> String {
        Self::pretty(&self.tool_schema.all_tools_schema(tools))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistant_domain::{ToolDefinition, ToolError};
    use serde_json::{Value, json};

    struct NameOnlySchema;

    impl ToolSchemaPort for NameOnlySchema {
        fn tool_to_schema(&self, tool: &ToolDefinition) -> Value {
            json!({ "name": tool.name })
        }
    }

    fn json_formatter() -> JsonFormatter {
        JsonFormatter::new(Arc::new(NameOnlySchema))
    }

    #[test]
    fn test_json_success_result() {
        let result = ToolResult::success(
            "word_counter",
            &json!({"word_count": 2, "character_count": 9, "sentence_count": 1}),
        );
        let parsed: Value = serde_json::from_str(&json_formatter().format_result(&result)).unwrap();

        assert_eq!(
            parsed,
            json!({"status": "success", "word_count": 2, "character_count": 9, "sentence_count": 1})
        );
    }

    #[test]
    fn test_json_error_result() {
        let result = ToolResult::failure("weather", ToolError::not_found("weather"));
        let parsed: Value = serde_json::from_str(&json_formatter().format_result(&result)).unwrap();

        assert_eq!(parsed["status"], "error");
        assert_eq!(parsed["error"]["code"], "NOT_FOUND");
        assert_eq!(parsed["error"]["message"], "Tool not found: weather");
    }

    #[test]
    fn test_json_tools_keep_order() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("word_counter", "Count"))
            .unwrap()
            .register(ToolDefinition::new("calculator", "Calc"))
            .unwrap();
        let parsed: Value = serde_json::from_str(&json_formatter().format_tools(&spec)).unwrap();

        assert_eq!(parsed, json!([{"name": "word_counter"}, {"name": "calculator"}]));
    }

    #[test]
    fn test_json_manifest() {
        let manifest = AgentManifest {
            name: "assistant".to_string(),
            model: "gemini-2.5-flash".to_string(),
            description: "Helper".to_string(),
            instruction: "Use tools.".to_string(),
            system_prompt: String::new(),
            tools: vec![json!({"name": "calculator"})],
        };
        let parsed: Value =
            serde_json::from_str(&json_formatter().format_manifest(&manifest)).unwrap();

        assert_eq!(parsed["name"], "assistant");
        assert_eq!(parsed["model"], "gemini-2.5-flash");
        assert_eq!(parsed["tools"][0]["name"], "calculator");
    }
}
