//! Random tool: random_number_generator
//!
//! Picks an integer uniformly from the integers inside `[min, max]`, i.e.
//! `ceil(min)..=floor(max)`. For integer bounds this is exactly the
//! `floor(random() * (max - min + 1)) + min` formula agents usually expect.
//!
//! Inverted ranges (`min > max`) and ranges holding no integer are rejected
//! with `INVALID_ARGUMENT` instead of producing an out-of-range value.

use assistant_domain::tool::{
    entities::{ParamType, ToolCall, ToolDefinition, ToolParameter},
    value_objects::{ToolError, ToolResult},
};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::format::format_number;

/// Tool name constant
pub const RANDOM_NUMBER_GENERATOR: &str = "random_number_generator";

/// Largest magnitude both f64 and i64 represent exactly (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

#[derive(Debug, Deserialize)]
struct RandomNumberArgs {
    min: f64,
    max: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RandomNumber {
    pub random_number: i64,
    /// `"[<min>, <max>]"` as requested
    pub range: String,
}

/// Get the tool definition for random_number_generator
pub fn random_number_definition() -> ToolDefinition {
    ToolDefinition::new(
        RANDOM_NUMBER_GENERATOR,
        "Generates a random number within a specified range.",
    )
    .with_parameter(
        ToolParameter::new("min", "The minimum value (inclusive).", true)
            .with_type(ParamType::Number),
    )
    .with_parameter(
        ToolParameter::new("max", "The maximum value (inclusive).", true)
            .with_type(ParamType::Number),
    )
}

/// Draw a number from `rng`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> Result<RandomNumber, ToolError> {
    let range = format!("[{}, {}]", format_number(min), format_number(max));

    if !min.is_finite() || !max.is_finite() {
        return Err(ToolError::invalid_argument(format!(
            "Range {} must have finite bounds",
            range
        )));
    }
    if min > max {
        return Err(ToolError::invalid_argument(format!(
            "min ({}) must not exceed max ({})",
            format_number(min),
            format_number(max)
        )));
    }

    let low = min.ceil();
    let high = max.floor();
    if low > high {
        return Err(ToolError::invalid_argument(format!(
            "Range {} contains no integer",
            range
        )));
    }
    if low < -MAX_SAFE_INTEGER || high > MAX_SAFE_INTEGER {
        return Err(ToolError::invalid_argument(format!(
            "Range {} exceeds the supported bounds of ±{}",
            range,
            format_number(MAX_SAFE_INTEGER)
        )));
    }

    Ok(RandomNumber {
        random_number: rng.gen_range(low as i64..=high as i64),
        range,
    })
}

/// Execute the random_number_generator tool with the thread-local RNG
pub fn execute_random_number(call: &ToolCall) -> ToolResult {
    execute_random_number_with(call, &mut rand::thread_rng())
}

/// Execute the random_number_generator tool with a caller-supplied RNG
pub fn execute_random_number_with<R: Rng + ?Sized>(call: &ToolCall, rng: &mut R) -> ToolResult {
    let outcome = call
        .parse_args::<RandomNumberArgs>()
        .and_then(|args| generate(rng, args.min, args.max));

    match outcome {
        Ok(number) => ToolResult::success(RANDOM_NUMBER_GENERATOR, &number),
        Err(e) => ToolResult::failure(RANDOM_NUMBER_GENERATOR, e),
    }
}
