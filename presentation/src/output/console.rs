//! Console output formatter for tool results and agent manifests

use crate::output::formatter::OutputFormatter;
use assistant_application::AgentManifest;
use assistant_domain::{ToolResult, ToolSpec};
use colored::Colorize;
use serde_json::Value;

/// Formats command output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the outcome of one tool call
    pub fn format_result(result: &ToolResult) -> String {
        let mut output = String::new();

        match result.error() {
            None => {
                output.push_str(&format!(
                    "{} {}\n",
                    "✓".green().bold(),
                    result.tool_name.bold()
                ));
                let width = result.payload.keys().map(|k| k.len()).max().unwrap_or(0);
                for (key, value) in &result.payload {
                    output.push_str(&format!(
                        "  {:<width$}  {}\n",
                        key.cyan(),
                        Self::display_value(value),
                        width = width
                    ));
                }
            }
            Some(error) => {
                output.push_str(&format!(
                    "{} {} {}\n",
                    "✗".red().bold(),
                    result.tool_name.bold(),
                    format!("[{}]", error.code).red()
                ));
                output.push_str(&format!("  {}\n", error.message));
            }
        }

        output
    }

    /// Format the agent registration manifest
    pub fn format_manifest(manifest: &AgentManifest) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&manifest.name));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Model:".cyan().bold(), manifest.model));
        if !manifest.description.is_empty() {
            output.push_str(&format!(
                "{} {}\n",
                "Description:".cyan().bold(),
                manifest.description
            ));
        }

        output.push_str(&Self::section_header("Tools"));
        for tool in &manifest.tools {
            output.push_str(&format!(
                "  {} {}\n",
                tool["name"].as_str().unwrap_or("?").yellow().bold(),
                tool["description"].as_str().unwrap_or("").dimmed()
            ));
        }

        output.push_str(&Self::section_header("Instruction"));
        output.push_str(&Self::indent(&manifest.instruction, "  "));
        output.push('\n');

        output.push_str(&Self::footer());
        output
    }

    /// Format the registered tool catalogue
    pub fn format_tools(tools: &ToolSpec) -> String {
        if tools.is_empty() {
            return format!("{}\n", "No tools registered.".dimmed());
        }

        let mut output = String::new();
        for tool in tools.all() {
            output.push_str(&format!("{}\n", tool.name.yellow().bold()));
            output.push_str(&format!("{}\n", Self::indent(&tool.description, "  ")));
            for param in &tool.parameters {
                let mut kind = param.param_type.to_string();
                if let Some(values) = &param.enum_values {
                    kind = format!("{}: {}", kind, values.join(" | "));
                }
                let required = if param.required {
                    "required".red().to_string()
                } else {
                    "optional".dimmed().to_string()
                };
                output.push_str(&format!(
                    "    {} ({}, {}) {}\n",
                    param.name.cyan(),
                    kind,
                    required,
                    param.description
                ));
            }
            output.push('\n');
        }

        output
    }

    fn display_value(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_result(&self, result: &ToolResult) -> String {
        Self::format_result(result)
    }

    fn format_manifest(&self, manifest: &AgentManifest) -> String {
        Self::format_manifest(manifest)
    }

    fn format_tools(&self, tools: &ToolSpec) -> String {
        Self::format_tools(tools)
    }
}
