//! Prompt domain
//!
//! Text rendering of an agent descriptor for hosts without native tool calling.

pub mod agent;

pub use agent::AgentPromptTemplate;
