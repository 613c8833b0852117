//! Chat gateway.
//!
//! Receives free-text input, forwards it to the chat model with the declared
//! tool set, dispatches at most one tool invocation, and normalizes whatever
//! comes back into the fixed response envelope. A model or tool failure
//! degrades to an explanatory envelope; nothing propagates as an error.

use std::sync::Arc;

use playcove_core::error::{CoveError, Result};
use playcove_interaction::{
    AgentTool, ChatEnvelope, ChatModel, ChatRequest, ChatTurn, ModelReply, ToolSpec,
};
use playcove_interaction::prompt::render_system_prompt;

use crate::conversation::ConversationCache;

/// Orchestrates one chat turn end to end.
pub struct ChatGateway {
    model: Arc<dyn ChatModel>,
    tools: Vec<Arc<dyn AgentTool>>,
    system_prompt: String,
    conversations: ConversationCache,
}

impl ChatGateway {
    /// Builds a gateway for a model and tool set.
    ///
    /// The system prompt is rendered once from the declared tools; a tool
    /// set the template cannot render is a configuration error.
    pub fn new(model: Arc<dyn ChatModel>, tools: Vec<Arc<dyn AgentTool>>) -> Result<Self> {
        let specs: Vec<ToolSpec> = tools.iter().map(|tool| tool.spec()).collect();
        let system_prompt = render_system_prompt(&specs)
            .map_err(|err| CoveError::config(format!("cannot render system prompt: {err}")))?;

        Ok(Self {
            model,
            tools,
            system_prompt,
            conversations: ConversationCache::new(),
        })
    }

    fn tool_specs(&self) -> Vec<ToolSpec> {
        self.tools.iter().map(|tool| tool.spec()).collect()
    }

    fn find_tool(&self, name: &str) -> Option<&Arc<dyn AgentTool>> {
        self.tools.iter().find(|tool| tool.name() == name)
    }

    /// Handles one chat turn for a session.
    ///
    /// Always returns a fully shaped envelope. The user message and the
    /// assistant's outcome (for tool turns, the serialized envelope, so quiz
    /// state survives in conversation context) are recorded against the
    /// session key.
    pub async fn chat(&self, session_key: &str, message: &str) -> ChatEnvelope {
        let mut messages = self.conversations.history(session_key).await;
        messages.push(ChatTurn::user(message));

        let request = ChatRequest {
            system: self.system_prompt.clone(),
            messages,
            tools: self.tool_specs(),
        };

        let envelope = match self.model.complete(request).await {
            Ok(ModelReply::Text(text)) => ChatEnvelope::from_model_text(&text),
            Ok(ModelReply::ToolCall { name, arguments }) => {
                self.dispatch_tool(&name, &arguments).await
            }
            Err(err) => {
                tracing::error!(%err, "[ChatGateway] Model call failed");
                ChatEnvelope::reply_only(
                    "Sorry, I ran into a problem answering that. Please try again in a moment.",
                )
            }
        };

        let assistant_record = serde_json::to_string(&envelope)
            .unwrap_or_else(|_| envelope.reply.clone());
        self.conversations
            .append(
                session_key,
                [ChatTurn::user(message), ChatTurn::assistant(assistant_record)],
            )
            .await;

        envelope
    }

    async fn dispatch_tool(&self, name: &str, arguments: &serde_json::Value) -> ChatEnvelope {
        let Some(tool) = self.find_tool(name) else {
            tracing::warn!(%name, "[ChatGateway] Model requested an undeclared tool");
            return ChatEnvelope::reply_only(
                "I tried to use a capability I don't have. Could you rephrase that?",
            );
        };

        tracing::info!(tool = %name, "[ChatGateway] Dispatching tool call");
        match tool.execute(arguments).await {
            Ok(reply) => reply.into_envelope(),
            Err(err) => {
                tracing::error!(tool = %name, %err, "[ChatGateway] Tool execution failed");
                ChatEnvelope::reply_only(
                    "I couldn't fetch that information right now. Please try again later.",
                )
            }
        }
    }
}
