//! Application layer for multi-tool-assistant
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    tool_executor::ToolExecutorPort,
    tool_schema::ToolSchemaPort,
};
pub use use_cases::describe_agent::{AgentManifest, DescribeAgentUseCase};
pub use use_cases::invoke_tool::{InvokeToolInput, InvokeToolUseCase};
