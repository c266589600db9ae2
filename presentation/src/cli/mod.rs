//! Command-line interface definitions

pub mod arguments;
pub mod commands;
