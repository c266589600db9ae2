//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod agent;
mod logging;
mod tools;

pub use agent::FileAgentConfig;
pub use logging::FileLoggingConfig;
pub use tools::FileToolsConfig;

use crate::tools::BUILTIN_TOOLS;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("agent.{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("tools.enabled: unknown tool '{name}' (available: {available})")]
    UnknownTool { name: String, available: String },

    #[error("tools.enabled: '{0}' is listed more than once")]
    DuplicateTool(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Agent descriptor settings
    pub agent: FileAgentConfig,
    /// Tool selection
    pub tools: FileToolsConfig,
    /// Transcript logging
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning every detected issue.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        let fields = [
            ("name", self.agent.name.as_str()),
            ("model", self.agent.model.as_str()),
            ("instruction", self.agent.instruction.as_str()),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                issues.push(ConfigValidationError::EmptyField(field));
            }
        }

        if let Some(enabled) = &self.tools.enabled {
            for (i, name) in enabled.iter().enumerate() {
                if !BUILTIN_TOOLS.contains(&name.as_str()) {
                    issues.push(ConfigValidationError::UnknownTool {
                        name: name.clone(),
                        available: BUILTIN_TOOLS.join(", "),
                    });
                } else if enabled[..i].contains(name) {
                    issues.push(ConfigValidationError::DuplicateTool(name.clone()));
                }
            }
        }

        issues
    }
}
