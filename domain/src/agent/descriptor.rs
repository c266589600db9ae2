//! Agent descriptor: the configuration handed to the hosting framework.
//!
//! An [`AgentDescriptor`] bundles identity (name, model), advisory prose
//! (description, instruction) and the ordered [`ToolSpec`]. It is built
//! once at startup and never mutated.

use crate::core::{error::DomainError, model::Model};
use crate::tool::entities::ToolSpec;

/// Name the assistant registers under unless configured otherwise
pub const DEFAULT_AGENT_NAME: &str = "multi_tool_assistant";

pub const DEFAULT_DESCRIPTION: &str = "A helpful assistant with calculator, text transformation, random number generation, and text analysis capabilities.";

/// Routing guidance for the model. Not validated programmatically.
pub const DEFAULT_INSTRUCTION: &str = "You are a versatile assistant with multiple tools at your disposal:
- Use 'calculator' for arithmetic operations
- Use 'text_transformer' to modify text
- Use 'random_number_generator' to generate random numbers
- Use 'word_counter' to analyze text statistics

Choose the appropriate tool based on the user's request.";

/// Immutable configuration for one conversational agent.
#[derive(Debug, Clone)]
pub struct AgentDescriptor {
    name: String,
    model: Model,
    description: String,
    instruction: String,
    tools: ToolSpec,
}

impl AgentDescriptor {
    /// Create a descriptor, rejecting names the framework could not route to.
    ///
    /// Names must be non-empty and consist of ASCII letters, digits and
    /// underscores, starting with a letter or underscore. The instruction
    /// must not be blank.
    pub fn new(
        name: impl Into<String>,
        model: Model,
        instruction: impl Into<String>,
        tools: ToolSpec,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let instruction = instruction.into();

        if !is_identifier(&name) {
            return Err(DomainError::InvalidAgent(format!(
                "agent name '{}' must be an identifier (letters, digits, underscores)",
                name
            )));
        }
        if model.as_str().trim().is_empty() {
            return Err(DomainError::InvalidAgent("model cannot be empty".to_string()));
        }
        if instruction.trim().is_empty() {
            return Err(DomainError::InvalidAgent(
                "instruction cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            name,
            model,
            description: String::new(),
            instruction,
            tools,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn tools(&self) -> &ToolSpec {
        &self.tools
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
