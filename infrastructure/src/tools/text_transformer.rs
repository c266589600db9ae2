//! Text tool: text_transformer

use assistant_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    value_objects::ToolResult,
};
use serde::{Deserialize, Serialize};

/// Tool name constant
pub const TEXT_TRANSFORMER: &str = "text_transformer";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transformation {
    /// Reverse the sequence of Unicode scalar values
    Reverse,
    Uppercase,
    Lowercase,
}

impl Transformation {
    pub const ALL: [Transformation; 3] = [
        Transformation::Reverse,
        Transformation::Uppercase,
        Transformation::Lowercase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Transformation::Reverse => "reverse",
            Transformation::Uppercase => "uppercase",
            Transformation::Lowercase => "lowercase",
        }
    }

    /// Case mapping is Unicode and locale-insensitive.
    pub fn apply(&self, text: &str) -> String {
        match self {
            // Per code point: surrogate pairs stay intact, combining marks
            // move to the other side of their base character.
            Transformation::Reverse => text.chars().rev().collect(),
            Transformation::Uppercase => text.to_uppercase(),
            Transformation::Lowercase => text.to_lowercase(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TextTransformerArgs {
    text: String,
    transformation: Transformation,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransformedText {
    pub original: String,
    pub transformed: String,
}

/// Get the tool definition for text_transformer
pub fn text_transformer_definition() -> ToolDefinition {
    ToolDefinition::new(
        TEXT_TRANSFORMER,
        "Transforms text by reversing it, converting to uppercase, or lowercase.",
    )
    .with_parameter(ToolParameter::new("text", "The text to transform.", true))
    .with_parameter(
        ToolParameter::new("transformation", "The type of transformation to apply.", true)
            .with_enum(Transformation::ALL.iter().map(Transformation::as_str)),
    )
}

pub fn transform(text: &str, transformation: Transformation) -> TransformedText {
    TransformedText {
        original: text.to_string(),
        transformed: transformation.apply(text),
    }
}

/// Execute the text_transformer tool
pub fn execute_text_transformer(call: &ToolCall) -> ToolResult {
    match call.parse_args::<TextTransformerArgs>() {
        Ok(args) => {
            ToolResult::success(TEXT_TRANSFORMER, &transform(&args.text, args.transformation))
        }
        Err(e) => ToolResult::failure(TEXT_TRANSFORMER, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse() {
        assert_eq!(Transformation::Reverse.apply("abc"), "cba");
        assert_eq!(Transformation::Reverse.apply(""), "");
    }

    #[test]
    fn test_reverse_keeps_astral_characters_intact() {
        assert_eq!(Transformation::Reverse.apply("a😀b"), "b😀a");
        assert_eq!(Transformation::Reverse.apply("日本語"), "語本日");
    }

    #[test]
    fn test_case_mapping() {
        assert_eq!(Transformation::Uppercase.apply("AbC"), "ABC");
        assert_eq!(Transformation::Lowercase.apply("AbC"), "abc");
        assert_eq!(Transformation::Uppercase.apply("straße"), "STRASSE");
        assert_eq!(Transformation::Lowercase.apply("İ"), "i\u{307}");
    }

    #[test]
    fn test_uppercase_is_idempotent() {
        for s in ["", "AbC", "straße", "ﬁne 123 ǅ", "Ωmega ß"] {
            let once = transform(s, Transformation::Uppercase).transformed;
            let twice = transform(&once, Transformation::Uppercase).transformed;
            assert_eq!(once, twice, "uppercase not idempotent for {:?}", s);
        }
    }

    #[test]
    fn test_execute_text_transformer() {
        let call = ToolCall::new(TEXT_TRANSFORMER)
            .with_arg("text", "abc")
            .with_arg("transformation", "reverse");
        let result = execute_text_transformer(&call);

        assert_eq!(
            result.to_json(),
            serde_json::json!({"status": "success", "original": "abc", "transformed": "cba"})
        );
    }

    #[test]
    fn test_execute_text_transformer_missing_text() {
        let call = ToolCall::new(TEXT_TRANSFORMER).with_arg("transformation", "uppercase");
        let result = execute_text_transformer(&call);

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");
    }
}
