//! Tool schema conversion port.
//!
//! Separates "which tools exist" (domain) from "how to serialize them for a
//! framework" (infrastructure).

use assistant_domain::tool::entities::{ToolDefinition, ToolSpec};

/// Port for converting tool definitions to the framework's JSON Schema form.
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single tool definition to provider-neutral JSON Schema.
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert all tools to a JSON Schema array, in registry order.
    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value> {
        spec.all().map(|t| self.tool_to_schema(t)).collect()
    }
}
