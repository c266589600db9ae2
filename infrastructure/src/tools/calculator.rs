//! Arithmetic tool: calculator

use assistant_domain::tool::{
    entities::{ParamType, ToolCall, ToolDefinition, ToolParameter},
    value_objects::ToolResult,
};
use serde::{Deserialize, Serialize};

use super::format::format_number;

/// Tool name constant
pub const CALCULATOR: &str = "calculator";

/// Arithmetic operation accepted by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// IEEE-754 double arithmetic. Dividing by zero (either sign) yields NaN.
    pub fn apply(&self, num1: f64, num2: f64) -> f64 {
        match self {
            Operation::Add => num1 + num2,
            Operation::Subtract => num1 - num2,
            Operation::Multiply => num1 * num2,
            Operation::Divide => {
                if num2 == 0.0 {
                    f64::NAN
                } else {
                    num1 / num2
                }
            }
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct CalculatorArgs {
    operation: Operation,
    num1: f64,
    num2: f64,
}

/// Calculator output. A NaN `result` serializes as JSON `null`.
#[derive(Debug, Clone, Serialize)]
pub struct Calculation {
    pub result: f64,
    /// `"<num1> <operation> <num2> = <result>"`
    pub expression: String,
}

/// Get the tool definition for calculator
pub fn calculator_definition() -> ToolDefinition {
    ToolDefinition::new(
        CALCULATOR,
        "Performs basic arithmetic operations (add, subtract, multiply, divide).",
    )
    .with_parameter(
        ToolParameter::new("operation", "The arithmetic operation to perform.", true)
            .with_enum(Operation::ALL.iter().map(Operation::as_str)),
    )
    .with_parameter(ToolParameter::new("num1", "The first number.", true).with_type(ParamType::Number))
    .with_parameter(ToolParameter::new("num2", "The second number.", true).with_type(ParamType::Number))
}

pub fn calculate(operation: Operation, num1: f64, num2: f64) -> Calculation {
    let result = operation.apply(num1, num2);
    Calculation {
        result,
        expression: format!(
            "{} {} {} = {}",
            format_number(num1),
            operation,
            format_number(num2),
            format_number(result)
        ),
    }
}

/// Execute the calculator tool
pub fn execute_calculator(call: &ToolCall) -> ToolResult {
    match call.parse_args::<CalculatorArgs>() {
        Ok(args) => ToolResult::success(CALCULATOR, &calculate(args.operation, args.num1, args.num2)),
        Err(e) => ToolResult::failure(CALCULATOR, e),
    }
}
