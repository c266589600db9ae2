//! Domain layer for multi-tool-assistant
//!
//! This crate contains the tool contract types and the agent descriptor.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Tools
//!
//! A tool is a named, schema-described pure function an agent framework can
//! invoke on behalf of a model. Its [`ToolDefinition`] declares typed
//! parameters (enums as closed literal sets); a [`ToolCall`] is checked
//! against it by a [`ToolValidator`] before the implementation runs.
//!
//! ## Agent Descriptor
//!
//! An [`AgentDescriptor`] bundles the agent's name, [`Model`], instruction
//! text and the ordered [`ToolSpec`] registry.

pub mod agent;
pub mod core;
pub mod prompt;
pub mod tool;

// Re-export commonly used types
pub use agent::{AgentDescriptor, DEFAULT_AGENT_NAME, DEFAULT_DESCRIPTION, DEFAULT_INSTRUCTION};
pub use crate::core::{error::DomainError, model::Model};
pub use prompt::AgentPromptTemplate;
pub use tool::{
    entities::{ParamType, ToolCall, ToolDefinition, ToolParameter, ToolSpec},
    traits::{DefaultToolValidator, ToolValidator},
    value_objects::{ToolError, ToolResult, ToolStatus},
};
