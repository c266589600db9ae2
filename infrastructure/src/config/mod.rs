//! Configuration file loading for multi-tool-assistant
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ASSISTANT_*` environment variables (`__` separates section and key)
//! 2. `--config <path>` specified file
//! 3. Project root: `./assistant.toml` or `./.assistant.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/multi-tool-assistant/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAgentConfig, FileConfig, FileLoggingConfig, FileToolsConfig,
};
pub use loader::ConfigLoader;
