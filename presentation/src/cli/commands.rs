//! CLI command definitions

use crate::cli::arguments::parse_key_value;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Text,
    /// JSON output (the exact objects handed to the framework)
    Json,
}

/// CLI arguments for multi-tool-assistant
#[derive(Parser, Debug)]
#[command(name = "multi-tool-assistant")]
#[command(author, version, about = "Multi-tool assistant - calculator, text, random and word-count tools")]
#[command(long_about = r#"
Multi-tool assistant exposes four small tools to a hosting agent framework:

  calculator               add / subtract / multiply / divide two numbers
  text_transformer         reverse / uppercase / lowercase a text
  random_number_generator  uniform integer in an inclusive range
  word_counter             word, character and sentence counts

Configuration files are loaded from (in priority order):
1. ASSISTANT_<SECTION>__<KEY>   Environment variables
2. --config <path>              Explicit config file
3. ./assistant.toml             Project-level config
4. ~/.config/multi-tool-assistant/config.toml   Global config

Example:
  multi-tool-assistant describe
  multi-tool-assistant call calculator --args '{"operation":"add","num1":5,"num2":3}'
  multi-tool-assistant call text_transformer --arg text=hello --arg transformation=reverse
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and the resolved configuration, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Append tool calls and results to this JSONL file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the agent manifest (name, model, instruction, tool schemas)
    Describe,

    /// List the registered tools and their parameters
    Tools,

    /// Invoke one tool with JSON arguments
    Call {
        /// Tool name (e.g. calculator)
        tool: String,

        /// Arguments as a JSON object
        #[arg(long, value_name = "JSON")]
        args: Option<String>,

        /// Single argument; the value is parsed as JSON, falling back to a string
        #[arg(long = "arg", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        arg: Vec<(String, serde_json::Value)>,
    },
}
