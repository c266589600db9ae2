//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: the LLM identifier an agent is configured with
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
