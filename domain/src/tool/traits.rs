//! Tool domain traits
//!
//! Contains pure domain logic traits for tool validation.
//! The async ToolExecutorPort is defined in the application layer (ports).

use super::entities::{ToolCall, ToolDefinition};

/// Validator for tool calls
///
/// This is a pure domain trait that validates tool calls
/// against their definitions without any I/O operations.
pub trait ToolValidator {
    /// Validate a tool call against its definition
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String>;
}

/// Default implementation of ToolValidator
///
/// Enforces the declared contract: required parameters are present, no
/// undeclared parameters, JSON types match, and enum parameters hold one of
/// their declared literals.
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String> {
        for param in &definition.parameters {
            let Some(value) = call.arguments.get(&param.name) else {
                if param.required {
                    return Err(format!(
                        "Missing required parameter '{}' for tool '{}'",
                        param.name, definition.name
                    ));
                }
                continue;
            };

            if !param.param_type.accepts(value) {
                return Err(format!(
                    "Parameter '{}' for tool '{}' must be a {}, got {}",
                    param.name, definition.name, param.param_type, value
                ));
            }

            if let Some(allowed) = &param.enum_values {
                let literal = value.as_str().unwrap_or_default();
                if !allowed.iter().any(|a| a == literal) {
                    return Err(format!(
                        "Parameter '{}' for tool '{}' must be one of [{}], got {}",
                        param.name,
                        definition.name,
                        allowed.join(", "),
                        value
                    ));
                }
            }
        }

        for arg_name in call.arguments.keys() {
            if definition.parameter(arg_name).is_none() {
                return Err(format!(
                    "Unknown parameter '{}' for tool '{}'",
                    arg_name, definition.name
                ));
            }
        }

        Ok(())
    }
}
