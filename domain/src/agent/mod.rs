//! Agent domain module
//!
//! Contains the agent descriptor: the declarative configuration (identity,
//! model, guidance text, tools) registered with an external orchestrator.

pub mod descriptor;

pub use descriptor::{
    AgentDescriptor, DEFAULT_AGENT_NAME, DEFAULT_DESCRIPTION, DEFAULT_INSTRUCTION,
};
