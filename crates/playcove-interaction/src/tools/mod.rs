//! Callable capabilities the assistant may invoke.
//!
//! Each tool is a named, schema-described capability. The model decides
//! when to invoke one (the system prompt carries the dispatch rules); the
//! gateway validates the choice and merges the typed result into the fixed
//! response envelope.

pub mod quiz;
pub mod recommend;
pub mod reviews;

use serde_json::Value;

use playcove_core::error::Result;

use crate::chat_model::ToolSpec;
use crate::envelope::ToolReply;

pub use quiz::RandomGameTool;
pub use recommend::RecommendationTool;
pub use reviews::ReviewLookupTool;

/// A capability the language model may invoke.
#[async_trait::async_trait]
pub trait AgentTool: Send + Sync {
    /// Stable tool name as declared to the model.
    fn name(&self) -> &'static str;

    /// One-line description used in the tool schema and the system prompt.
    fn description(&self) -> &'static str;

    /// JSON schema of the tool's argument object.
    fn parameters(&self) -> Value;

    /// Runs the tool against the provided arguments.
    ///
    /// Tools are read-only: failures mean a degraded reply, never partial
    /// state. Argument problems should come back as `ReplyOnly` guidance
    /// rather than errors where possible.
    async fn execute(&self, arguments: &Value) -> Result<ToolReply>;

    /// Schema entry declared to the model for this tool.
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters(),
        }
    }
}

/// Pulls a string argument out of a tool argument object.
pub(crate) fn string_arg<'a>(arguments: &'a Value, key: &str) -> Option<&'a str> {
    arguments.get(key).and_then(Value::as_str)
}
