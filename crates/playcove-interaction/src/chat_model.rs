//! Chat model seam.
//!
//! The language model runtime is an external collaborator: it receives a
//! prompt plus the declared tool schema and answers with either plain text
//! or a request to invoke one tool. Everything past that contract (dispatch,
//! validation, envelopes) belongs to the gateway.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Role of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One prior turn of the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Schema describing one callable capability to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    /// JSON schema of the tool's arguments
    pub parameters: Value,
}

/// A complete model invocation: system prompt, history window, current
/// message, and the declared tool set.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub system: String,
    pub messages: Vec<ChatTurn>,
    pub tools: Vec<ToolSpec>,
}

/// What the model elected to do with a turn.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelReply {
    /// Plain assistant text
    Text(String),
    /// Invocation request for one declared tool
    ToolCall { name: String, arguments: Value },
}

/// Errors surfaced by a chat model implementation.
#[derive(Error, Debug)]
pub enum ChatModelError {
    #[error("chat model request failed: {message}")]
    Request { message: String, is_retryable: bool },

    #[error("chat model returned {status}: {message}")]
    Http {
        status: u16,
        message: String,
        is_retryable: bool,
        retry_after: Option<Duration>,
    },

    #[error("chat model returned a malformed response: {0}")]
    Malformed(String),

    #[error("chat model is not configured: {0}")]
    NotConfigured(String),
}

/// External language model collaborator.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, request: ChatRequest) -> Result<ModelReply, ChatModelError>;
}

/// Stand-in model used when no API key is configured.
///
/// Keeps the server bootable in development; every chat degrades to a fixed
/// explanation instead of an error.
#[derive(Debug, Clone, Default)]
pub struct OfflineChatModel;

#[async_trait]
impl ChatModel for OfflineChatModel {
    async fn complete(&self, _request: ChatRequest) -> Result<ModelReply, ChatModelError> {
        Ok(ModelReply::Text(
            "The assistant is offline right now - no language model is configured.".to_string(),
        ))
    }
}
