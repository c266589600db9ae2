//! Describe Agent use case.
//!
//! Produces the registration manifest a hosting framework consumes at
//! startup: identity, model, guidance text and the tool schemas in registry
//! order.

use crate::ports::tool_schema::ToolSchemaPort;
use assistant_domain::{AgentDescriptor, AgentPromptTemplate};
use serde::Serialize;
use std::sync::Arc;

/// What the framework registers for one agent.
#[derive(Debug, Clone, Serialize)]
pub struct AgentManifest {
    pub name: String,
    pub model: String,
    pub description: String,
    pub instruction: String,
    /// Instruction plus tool catalogue, for hosts without native tool calling
    pub system_prompt: String,
    pub tools: Vec<serde_json::Value>,
}

/// Use case rendering an [`AgentDescriptor`] as an [`AgentManifest`].
#[derive(Clone)]
pub struct DescribeAgentUseCase {
    tool_schema: Arc<dyn ToolSchemaPort>,
}

impl DescribeAgentUseCase {
    pub fn new(tool_schema: Arc<dyn ToolSchemaPort>) -> Self {
        Self { tool_schema }
    }

    pub fn execute(&self, agent: &AgentDescriptor) -> AgentManifest {
        AgentManifest {
            name: agent.name().to_string(),
            model: agent.model().to_string(),
            description: agent.description().to_string(),
            instruction: agent.instruction().to_string(),
            system_prompt: AgentPromptTemplate::system(agent),
            tools: self.tool_schema.all_tools_schema(agent.tools()),
        }
    }
}
