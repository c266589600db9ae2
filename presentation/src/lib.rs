//! Presentation layer for multi-tool-assistant
//!
//! This crate contains CLI definitions, argument parsing and
//! output formatters.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::arguments::{build_arguments, parse_key_value};
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{JsonFormatter, OutputFormatter, formatter_for};
