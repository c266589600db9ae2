//! Tool implementations for the assistant
//!
//! Each tool module exposes a name constant, a `*_definition()` schema
//! builder and an `execute_*` function over a validated [`ToolCall`]. The
//! definition and the function are paired in one table, so a registered
//! tool always has an implementation:
//!
//! - `calculator`: arithmetic on two numbers
//! - `text_transformer`: reverse / uppercase / lowercase
//! - `random_number_generator`: uniform integer in an inclusive range
//! - `word_counter`: word, character and sentence counts
//!
//! [`ToolCall`]: assistant_domain::tool::ToolCall

pub mod calculator;
pub mod random_number;
pub mod text_transformer;
pub mod word_counter;

mod executor;
mod format;
mod schema;

pub use executor::LocalToolExecutor;
pub use schema::JsonSchemaToolConverter;

use assistant_domain::DomainError;
use assistant_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolSpec},
    value_objects::ToolResult,
};

/// Function running one validated call
pub type ToolHandler = fn(&ToolCall) -> ToolResult;

/// A built-in tool: its schema paired with the function implementing it
struct BuiltinTool {
    name: &'static str,
    definition: fn() -> ToolDefinition,
    handler: ToolHandler,
}

/// Registration order
static BUILTINS: [BuiltinTool; 4] = [
    BuiltinTool {
        name: calculator::CALCULATOR,
        definition: calculator::calculator_definition,
        handler: calculator::execute_calculator,
    },
    BuiltinTool {
        name: text_transformer::TEXT_TRANSFORMER,
        definition: text_transformer::text_transformer_definition,
        handler: text_transformer::execute_text_transformer,
    },
    BuiltinTool {
        name: random_number::RANDOM_NUMBER_GENERATOR,
        definition: random_number::random_number_definition,
        handler: random_number::execute_random_number,
    },
    BuiltinTool {
        name: word_counter::WORD_COUNTER,
        definition: word_counter::word_counter_definition,
        handler: word_counter::execute_word_counter,
    },
];

/// Built-in tool names, in the order they are registered
pub const BUILTIN_TOOLS: [&str; 4] = [
    calculator::CALCULATOR,
    text_transformer::TEXT_TRANSFORMER,
    random_number::RANDOM_NUMBER_GENERATOR,
    word_counter::WORD_COUNTER,
];

fn builtin_definitions() -> impl Iterator<Item = ToolDefinition> {
    BUILTINS.iter().map(|tool| (tool.definition)())
}

/// Implementation of the built-in tool called `name`
pub(crate) fn handler_for(name: &str) -> Option<ToolHandler> {
    BUILTINS
        .iter()
        .find(|tool| tool.name == name)
        .map(|tool| tool.handler)
}

/// Create the default tool specification with all built-in tools
pub fn default_tool_spec() -> Result<ToolSpec, DomainError> {
    builtin_definitions().try_fold(ToolSpec::new(), ToolSpec::register)
}

/// Tool specification restricted to `enabled`, keeping built-in order.
///
/// Unknown names are rejected; duplicates in `enabled` are ignored.
pub fn tool_spec_for(enabled: &[String]) -> Result<ToolSpec, DomainError> {
    if let Some(unknown) = enabled
        .iter()
        .find(|name| !BUILTIN_TOOLS.contains(&name.as_str()))
    {
        return Err(DomainError::UnknownTool(unknown.clone()));
    }

    builtin_definitions()
        .filter(|d| enabled.iter().any(|name| *name == d.name))
        .try_fold(ToolSpec::new(), ToolSpec::register)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_consistent() {
        let names: Vec<_> = BUILTINS.iter().map(|tool| tool.name).collect();
        assert_eq!(names, BUILTIN_TOOLS);

        for tool in &BUILTINS {
            assert_eq!((tool.definition)().name, tool.name);
            assert!(handler_for(tool.name).is_some());
        }
        assert!(handler_for("weather").is_none());
    }

    #[test]
    fn test_default_tool_spec_order() {
        let spec = default_tool_spec().unwrap();
        let names: Vec<_> = spec.names().collect();

        assert_eq!(names, BUILTIN_TOOLS);
    }

    #[test]
    fn test_tool_spec_for_keeps_builtin_order() {
        let enabled = vec!["word_counter".to_string(), "calculator".to_string()];
        let spec = tool_spec_for(&enabled).unwrap();

        assert_eq!(spec.names().collect::<Vec<_>>(), vec!["calculator", "word_counter"]);
    }

    #[test]
    fn test_tool_spec_for_unknown_name() {
        let err = tool_spec_for(&["weather".to_string()]).unwrap_err();
        assert_eq!(err, DomainError::UnknownTool("weather".to_string()));
    }

    #[test]
    fn test_tool_spec_for_empty() {
        assert!(tool_spec_for(&[]).unwrap().is_empty());
    }
}
