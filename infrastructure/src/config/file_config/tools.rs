//! Tools configuration from TOML (`[tools]` section)

use serde::{Deserialize, Serialize};

/// Raw tools configuration from TOML
///
/// ```toml
/// [tools]
/// enabled = ["calculator", "word_counter"]   # omit to enable all tools
/// ```
///
/// Enabled tools keep their built-in registration order regardless of the
/// order listed here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileToolsConfig {
    /// Subset of built-in tools to expose (None = all)
    pub enabled: Option<Vec<String>>,
}
