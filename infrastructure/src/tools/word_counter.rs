//! Text tool: word_counter

use assistant_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    value_objects::ToolResult,
};
use serde::{Deserialize, Serialize};

/// Tool name constant
pub const WORD_COUNTER: &str = "word_counter";

#[derive(Debug, Deserialize)]
struct WordCounterArgs {
    text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextStatistics {
    /// Maximal runs of non-whitespace
    pub word_count: usize,
    /// Unicode scalar values, whitespace included
    pub character_count: usize,
    /// Non-blank segments between runs of `.`, `!` and `?`
    pub sentence_count: usize,
}

/// Get the tool definition for word_counter
pub fn word_counter_definition() -> ToolDefinition {
    ToolDefinition::new(
        WORD_COUNTER,
        "Counts words, characters, and sentences in a given text.",
    )
    .with_parameter(ToolParameter::new("text", "The text to analyze.", true))
}

pub fn count(text: &str) -> TextStatistics {
    TextStatistics {
        word_count: text.split_whitespace().count(),
        character_count: text.chars().count(),
        sentence_count: text
            .split(['.', '!', '?'])
            .filter(|segment| !segment.trim().is_empty())
            .count(),
    }
}

/// Execute the word_counter tool
pub fn execute_word_counter(call: &ToolCall) -> ToolResult {
    match call.parse_args::<WordCounterArgs>() {
        Ok(args) => ToolResult::success(WORD_COUNTER, &count(&args.text)),
        Err(e) => ToolResult::failure(WORD_COUNTER, e),
    }
}
