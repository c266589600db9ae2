//! Prompt templates for the agent

use crate::agent::AgentDescriptor;
use crate::tool::entities::{ToolParameter, ToolSpec};

/// Templates for generating agent prompts
///
/// Frameworks with native tool calling only need the instruction text and
/// the JSON schemas; this template is for hosts that want a single text
/// system prompt instead.
pub struct AgentPromptTemplate;

impl AgentPromptTemplate {
    /// System prompt: the agent's instruction followed by a tool catalogue
    pub fn system(agent: &AgentDescriptor) -> String {
        format!(
            r#"{instruction}

## Available Tools

{tool_descriptions}
"#,
            instruction = agent.instruction(),
            tool_descriptions = Self::tool_catalogue(agent.tools())
        )
    }

    /// Markdown listing of every tool and its parameters, in registry order
    pub fn tool_catalogue(tool_spec: &ToolSpec) -> String {
        tool_spec
            .all()
            .map(|t| {
                let params = t
                    .parameters
                    .iter()
                    .map(Self::parameter_line)
                    .collect::<Vec<_>>()
                    .join("\n");

                format!(
                    "- **{}**: {}\n  Parameters:\n{}",
                    t.name, t.description, params
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn parameter_line(p: &ToolParameter) -> String {
        let required = if p.required { " (required)" } else { "" };
        let kind = match &p.enum_values {
            Some(values) => format!("one of {}", values.join(" | ")),
            None => p.param_type.to_string(),
        };
        format!("    - {} [{}]: {}{}", p.name, kind, p.description, required)
    }
}
