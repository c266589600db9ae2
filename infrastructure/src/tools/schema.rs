//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] that produces provider-neutral
//! JSON Schema for native tool-calling APIs.

use assistant_application::ports::tool_schema::ToolSchemaPort;
use assistant_domain::tool::entities::ToolDefinition;

/// Default implementation producing provider-neutral JSON Schema.
///
/// Each parameter becomes a property with its `type` and `description`;
/// enum parameters additionally carry an `enum` array of their literals.
pub struct JsonSchemaToolConverter;

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            let mut prop = serde_json::Map::new();
            prop.insert(
                "type".to_string(),
                serde_json::json!(param.param_type.as_str()),
            );
            prop.insert(
                "description".to_string(),
                serde_json::json!(param.description),
            );
            if let Some(values) = &param.enum_values {
                prop.insert("enum".to_string(), serde_json::json!(values));
            }
            properties.insert(param.name.clone(), serde_json::Value::Object(prop));

            if param.required {
                required.push(serde_json::json!(param.name));
            }
        }

        serde_json::json!({
            "name": tool.name,
            "description": tool.description,
            "input_schema": {
                "type": "object",
                "properties": properties,
                "required": required,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::default_tool_spec;

    #[test]
    fn test_calculator_schema() {
        let spec = default_tool_spec().unwrap();
        let schema = JsonSchemaToolConverter.tool_to_schema(spec.get("calculator").unwrap());

        assert_eq!(schema["name"], "calculator");
        assert_eq!(
            schema["description"],
            "Performs basic arithmetic operations (add, subtract, multiply, divide)."
        );
        assert_eq!(schema["input_schema"]["type"], "object");

        let operation = &schema["input_schema"]["properties"]["operation"];
        assert_eq!(operation["type"], "string");
        assert_eq!(
            operation["enum"],
            serde_json::json!(["add", "subtract", "multiply", "divide"])
        );
        assert_eq!(operation["description"], "The arithmetic operation to perform.");

        let num1 = &schema["input_schema"]["properties"]["num1"];
        assert_eq!(num1["type"], "number");
        assert!(num1.get("enum").is_none());

        assert_eq!(
            schema["input_schema"]["required"],
            serde_json::json!(["operation", "num1", "num2"])
        );
    }

    #[test]
    fn test_all_tools_schema_in_registry_order() {
        let spec = default_tool_spec().unwrap();
        let tools = JsonSchemaToolConverter.all_tools_schema(&spec);

        let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert_eq!(
            names,
            vec![
                "calculator",
                "text_transformer",
                "random_number_generator",
                "word_counter"
            ]
        );
        for tool in &tools {
            assert!(tool["description"].is_string());
            assert_eq!(tool["input_schema"]["type"], "object");
        }
    }
}
