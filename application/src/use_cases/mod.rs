//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod describe_agent;
pub mod invoke_tool;
