//! CLI entrypoint for the multi-tool assistant
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use assistant_application::{
    ConversationLogger, DescribeAgentUseCase, InvokeToolInput, InvokeToolUseCase, ToolSchemaPort,
};
use assistant_domain::AgentDescriptor;
use assistant_infrastructure::{
    ConfigLoader, FileConfig, JsonSchemaToolConverter, JsonlConversationLogger, LocalToolExecutor,
    default_tool_spec, tool_spec_for,
};
use assistant_presentation::{Cli, Command, build_arguments, formatter_for};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // stdout carries command output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        println!();
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(ExitCode::SUCCESS);
    }

    let issues = config.validate();
    if !issues.is_empty() {
        let details: Vec<String> = issues.iter().map(|i| format!("  - {}", i)).collect();
        bail!("Invalid configuration:\n{}", details.join("\n"));
    }

    // === Dependency Injection ===
    let agent = build_agent(&config)?;
    info!(
        "Agent '{}' on {} with {} tools",
        agent.name(),
        agent.model(),
        agent.tools().len()
    );

    let tool_schema: Arc<dyn ToolSchemaPort> = Arc::new(JsonSchemaToolConverter);
    let executor = Arc::new(LocalToolExecutor::with_tools(agent.tools().clone())?);

    let mut invoke_tool = InvokeToolUseCase::new(executor);
    let log_path = cli.log_file.clone().or(config.logging.conversation_log.clone());
    if let Some(path) = log_path {
        match JsonlConversationLogger::new(&path) {
            Some(logger) => {
                info!("Logging tool calls to {}", logger.path().display());
                let logger: Arc<dyn ConversationLogger> = Arc::new(logger);
                invoke_tool = invoke_tool.with_conversation_logger(logger);
            }
            None => warn!("Conversation log disabled: cannot open {}", path.display()),
        }
    }

    let formatter = formatter_for(cli.output, tool_schema.clone());

    match cli.command.unwrap_or(Command::Describe) {
        Command::Describe => {
            let manifest = DescribeAgentUseCase::new(tool_schema).execute(&agent);
            println!("{}", formatter.format_manifest(&manifest));
        }
        Command::Tools => {
            print!("{}", formatter.format_tools(agent.tools()));
        }
        Command::Call { tool, args, arg } => {
            let arguments = build_arguments(args.as_deref(), &arg).map_err(|e| anyhow!(e))?;
            let result = invoke_tool
                .execute(InvokeToolInput::new(tool, arguments))
                .await;

            println!("{}", formatter.format_result(&result));
            if !result.is_success() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Build the agent descriptor from the resolved configuration.
fn build_agent(config: &FileConfig) -> Result<AgentDescriptor> {
    let tools = match &config.tools.enabled {
        Some(enabled) => tool_spec_for(enabled)?,
        None => default_tool_spec()?,
    };

    let agent = AgentDescriptor::new(
        config.agent.name.as_str(),
        config.agent.model.clone(),
        config.agent.instruction.as_str(),
        tools,
    )?
    .with_description(config.agent.description.as_str());

    Ok(agent)
}
