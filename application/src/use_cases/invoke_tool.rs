//! Invoke Tool use case.
//!
//! The single-call path a framework takes once the model has picked a tool:
//! build a [`ToolCall`] from the raw JSON arguments, hand it to the
//! [`ToolExecutorPort`] (which validates and dispatches), and record the
//! exchange in the conversation log.
//!
//! Failures never escape as `Err`: malformed arguments and unknown tools come
//! back as `status: error` results the framework can show to the model.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::tool_executor::ToolExecutorPort;
use assistant_domain::tool::{ToolCall, ToolResult};
use std::sync::Arc;
use tracing::{debug, warn};

/// Input for the [`InvokeToolUseCase`].
#[derive(Debug, Clone)]
pub struct InvokeToolInput {
    /// Name of the tool the model selected.
    pub tool_name: String,
    /// Raw JSON argument object from the model.
    pub arguments: serde_json::Value,
}

impl InvokeToolInput {
    pub fn new(tool_name: impl Into<String>, arguments: serde_json::Value) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments,
        }
    }
}

/// Use case for invoking one tool on behalf of the model.
#[derive(Clone)]
pub struct InvokeToolUseCase {
    tool_executor: Arc<dyn ToolExecutorPort>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl InvokeToolUseCase {
    pub fn new(tool_executor: Arc<dyn ToolExecutorPort>) -> Self {
        Self {
            tool_executor,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub async fn execute(&self, input: InvokeToolInput) -> ToolResult {
        self.conversation_logger.log(ConversationEvent::new(
            "tool_call",
            serde_json::json!({
                "tool": input.tool_name,
                "arguments": input.arguments,
            }),
        ));

        let result = match ToolCall::from_json(&input.tool_name, input.arguments) {
            Ok(call) => {
                debug!(tool = %call.tool_name, args = call.arguments.len(), "Dispatching tool call");
                self.tool_executor.execute(&call).await
            }
            Err(e) => ToolResult::failure(&input.tool_name, e),
        };

        if let Some(error) = result.error() {
            warn!(tool = %result.tool_name, code = %error.code, "Tool call rejected: {}", error.message);
        }

        self.conversation_logger.log(ConversationEvent::new(
            "tool_result",
            serde_json::json!({
                "tool": result.tool_name,
                "result": result.to_json(),
            }),
        ));

        result
    }
}
