//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Directory name under the platform config dir
const APP_DIR: &str = "multi-tool-assistant";

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["assistant.toml", ".assistant.toml"];

/// Environment variable prefix (`ASSISTANT_AGENT__MODEL` -> `agent.model`)
const ENV_PREFIX: &str = "ASSISTANT_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables: `ASSISTANT_<SECTION>__<KEY>`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./assistant.toml` or `./.assistant.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/multi-tool-assistant/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/multi-tool-assistant/config.toml if set,
    /// otherwise falls back to ~/.config/multi-tool-assistant/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     {}<SECTION>__<KEY>", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./assistant.toml or ./.assistant.toml");
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:  {}", mark, path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistant_domain::Model;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.agent.name, "multi_tool_assistant");
        assert_eq!(config.agent.model, Model::Gemini25Flash);
        assert!(config.tools.enabled.is_none());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        Jail::expect_with(|jail| {
            let xdg = jail.directory().join("xdg");
            jail.set_env("XDG_CONFIG_HOME", xdg.display());

            let path = ConfigLoader::global_config_path().expect("config dir");
            assert!(path.starts_with(&xdg));
            assert!(path.to_string_lossy().contains("multi-tool-assistant"));
            Ok(())
        });
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config, FileConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_project_file_overrides_global() {
        Jail::expect_with(|jail| {
            let xdg = jail.directory().join("xdg");
            std::fs::create_dir_all(xdg.join(APP_DIR)).expect("create xdg dir");
            jail.set_env("XDG_CONFIG_HOME", xdg.display());

            jail.create_file(
                "xdg/multi-tool-assistant/config.toml",
                r#"
[agent]
name = "global_agent"
model = "gemini-2.5-pro"
"#,
            )?;
            jail.create_file(
                ".assistant.toml",
                r#"
[agent]
name = "project_agent"
"#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.agent.name, "project_agent");
            // Global value survives where the project file is silent
            assert_eq!(config.agent.model, Model::Gemini25Pro);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_path_overrides_project() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
            jail.create_file(
                "assistant.toml",
                r#"
[tools]
enabled = ["calculator", "word_counter"]
"#,
            )?;
            jail.create_file(
                "custom.toml",
                r#"
[tools]
enabled = ["text_transformer"]

[logging]
conversation_log = "tools.jsonl"
"#,
            )?;

            let config = ConfigLoader::load(Some(Path::new("custom.toml"))).map_err(|e| *e)?;
            assert_eq!(
                config.tools.enabled,
                Some(vec!["text_transformer".to_string()])
            );
            assert_eq!(
                config.logging.conversation_log,
                Some(PathBuf::from("tools.jsonl"))
            );
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
            jail.create_file(
                "assistant.toml",
                r#"
[agent]
model = "gemini-2.5-pro"
"#,
            )?;
            jail.set_env("ASSISTANT_AGENT__MODEL", "local-llama");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.agent.model, Model::Custom("local-llama".to_string()));
            Ok(())
        });
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        Jail::expect_with(|jail| {
            jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
            jail.create_file("assistant.toml", "[agent\nname = ")?;

            assert!(ConfigLoader::load(None).is_err());
            Ok(())
        });
    }
}
