//! Infrastructure layer for multi-tool-assistant
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the four built-in tools, the JSON schema
//! converter, the JSONL conversation logger and configuration loading.

pub mod config;
pub mod logging;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileAgentConfig, FileConfig, FileLoggingConfig,
    FileToolsConfig,
};
pub use logging::JsonlConversationLogger;
pub use tools::{
    BUILTIN_TOOLS, JsonSchemaToolConverter, LocalToolExecutor, default_tool_spec, tool_spec_for,
};
