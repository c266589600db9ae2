//! Tool domain module
//!
//! This module defines the **tool contract layer**: how a capability is
//! described to an agent framework, how a call against it is checked, and
//! what comes back.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (registry)   │    │ (invocation) │    │ (output)     │
//! └──────┬───────┘    └──────────────┘    └──────────────┘
//!        │
//!        └─ "calculator" → ToolDefinition { parameters: [operation ∈ {...}, num1, num2] }
//! ```
//!
//! # Key Types
//!
//! - [`ToolSpec`]: Ordered registry of tool definitions, unique by name
//! - [`ToolDefinition`]: Schema for a single tool (name, description, params)
//! - [`ToolParameter`]: One typed parameter, optionally restricted to an enum
//! - [`ToolCall`]: An invocation request with JSON arguments
//! - [`ToolResult`]: `success` + fixed-shape payload, or `error` + [`ToolError`]
//! - [`ToolValidator`]: Pure domain trait for parameter validation
//!
//! # Architecture
//!
//! - **Domain** (this module): Pure definitions, no I/O
//! - **Application** (`ToolExecutorPort`): Port trait for tool execution
//! - **Infrastructure** (`LocalToolExecutor`): The four tool implementations
//!   and the dispatcher that routes calls to them

pub mod entities;
pub mod traits;
pub mod value_objects;

pub use entities::{ParamType, ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use traits::{DefaultToolValidator, ToolValidator};
pub use value_objects::{ToolError, ToolResult, ToolStatus};
