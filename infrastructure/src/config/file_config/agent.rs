//! Agent configuration from TOML (`[agent]` section)

use assistant_domain::{DEFAULT_AGENT_NAME, DEFAULT_DESCRIPTION, DEFAULT_INSTRUCTION, Model};
use serde::{Deserialize, Serialize};

/// Raw agent configuration from TOML
///
/// # Example
///
/// ```toml
/// [agent]
/// name = "multi_tool_assistant"
/// model = "gemini-2.5-flash"
/// description = "A helpful assistant ..."
/// instruction = """
/// You are a versatile assistant ...
/// """
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentConfig {
    /// Name the agent registers under
    pub name: String,
    /// Model identifier handed to the framework
    pub model: Model,
    /// One-line description of the agent
    pub description: String,
    /// Routing guidance for the model
    pub instruction: String,
}

impl Default for FileAgentConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_AGENT_NAME.to_string(),
            model: Model::default(),
            description: DEFAULT_DESCRIPTION.to_string(),
            instruction: DEFAULT_INSTRUCTION.to_string(),
        }
    }
}
