//! OpenAiChatAgent - Direct REST implementation of the chat model seam.
//!
//! Calls the OpenAI Chat Completions API with the declared tool schema.
//! Configuration comes from environment variables; the API key never leaves
//! the process.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::HeaderValue};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::chat_model::{ChatModel, ChatModelError, ChatRequest, ChatRole, ModelReply, ToolSpec};

const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TEMPERATURE: f32 = 0.7;
const BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Chat model implementation that talks to the OpenAI HTTP API.
#[derive(Clone)]
pub struct OpenAiChatAgent {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
}

impl OpenAiChatAgent {
    /// Creates a new agent with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// `OPENAI_API_KEY` is required; `OPENAI_MODEL_NAME` defaults to
    /// `gpt-4o-mini`.
    pub fn try_from_env() -> Result<Self, ChatModelError> {
        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            ChatModelError::NotConfigured(
                "OPENAI_API_KEY not found in environment variables".into(),
            )
        })?;

        let model = env::var("OPENAI_MODEL_NAME").unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.into());
        Ok(Self::new(api_key, model))
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Points the agent at a different completions endpoint (stub servers in
    /// tests, proxies in deployments).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build_body(&self, request: &ChatRequest) -> ChatCompletionRequest {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        messages.push(ApiMessage {
            role: "system",
            content: request.system.clone(),
        });
        for turn in &request.messages {
            messages.push(ApiMessage {
                role: match turn.role {
                    ChatRole::User => "user",
                    ChatRole::Assistant => "assistant",
                },
                content: turn.content.clone(),
            });
        }

        let tools = if request.tools.is_empty() {
            None
        } else {
            Some(request.tools.iter().map(ApiTool::from_spec).collect())
        };

        ChatCompletionRequest {
            model: self.model.clone(),
            messages,
            temperature: self.temperature,
            tools,
            tool_choice: if request.tools.is_empty() {
                None
            } else {
                Some("auto")
            },
        }
    }

    async fn send_request(
        &self,
        body: &ChatCompletionRequest,
    ) -> Result<ModelReply, ChatModelError> {
        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| ChatModelError::Request {
                message: format!("OpenAI API request failed: {err}"),
                is_retryable: err.is_connect() || err.is_timeout(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let retry_after = parse_retry_after(response.headers().get("retry-after"));
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read OpenAI error body".to_string());
            return Err(map_http_error(status, body_text, retry_after));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|err| {
            ChatModelError::Malformed(format!("failed to parse OpenAI response: {err}"))
        })?;

        extract_reply(parsed)
    }
}

#[async_trait]
impl ChatModel for OpenAiChatAgent {
    async fn complete(&self, request: ChatRequest) -> Result<ModelReply, ChatModelError> {
        let body = self.build_body(&request);
        self.send_request(&body).await
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ApiMessage>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<ApiTool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<&'static str>,
}

#[derive(Serialize)]
struct ApiMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ApiTool {
    r#type: &'static str,
    function: ApiFunction,
}

#[derive(Serialize)]
struct ApiFunction {
    name: String,
    description: String,
    parameters: serde_json::Value,
}

impl ApiTool {
    fn from_spec(spec: &ToolSpec) -> Self {
        Self {
            r#type: "function",
            function: ApiFunction {
                name: spec.name.clone(),
                description: spec.description.clone(),
                parameters: spec.parameters.clone(),
            },
        }
    }
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    tool_calls: Option<Vec<ResponseToolCall>>,
}

#[derive(Deserialize)]
struct ResponseToolCall {
    function: ResponseFunction,
}

#[derive(Deserialize)]
struct ResponseFunction {
    name: String,
    /// JSON-encoded argument object
    arguments: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    #[allow(dead_code)]
    r#type: Option<String>,
    #[allow(dead_code)]
    code: Option<String>,
}

fn extract_reply(response: ChatCompletionResponse) -> Result<ModelReply, ChatModelError> {
    let message = response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message)
        .ok_or_else(|| {
            ChatModelError::Malformed("OpenAI API returned no choices in the response".into())
        })?;

    // The model may invoke at most one tool per turn; extra calls are dropped.
    if let Some(calls) = message.tool_calls
        && let Some(call) = calls.into_iter().next()
    {
        let arguments = serde_json::from_str(&call.function.arguments).map_err(|err| {
            ChatModelError::Malformed(format!("tool call arguments are not valid JSON: {err}"))
        })?;
        return Ok(ModelReply::ToolCall {
            name: call.function.name,
            arguments,
        });
    }

    message.content.map(ModelReply::Text).ok_or_else(|| {
        ChatModelError::Malformed("OpenAI API returned neither content nor a tool call".into())
    })
}

fn map_http_error(
    status: StatusCode,
    body: String,
    retry_after: Option<Duration>,
) -> ChatModelError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or_else(|_| body.clone());

    let is_retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    ChatModelError::Http {
        status: status.as_u16(),
        message,
        is_retryable,
        retry_after,
    }
}

fn parse_retry_after(header: Option<&HeaderValue>) -> Option<Duration> {
    let value = header?.to_str().ok()?;
    if let Ok(seconds) = value.parse::<u64>() {
        return Some(Duration::from_secs(seconds));
    }

    // Retry-After HTTP-date parsing is omitted for simplicity
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_reply_prefers_the_first_tool_call() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{
                "choices": [{
                    "message": {
                        "content": null,
                        "tool_calls": [{
                            "function": {
                                "name": "fetch_game_reviews",
                                "arguments": "{\"game_title\": \"Celeste\"}"
                            }
                        }]
                    }
                }]
            }"#,
        )
        .expect("response should parse");

        let reply = extract_reply(response).expect("reply should extract");
        match reply {
            ModelReply::ToolCall { name, arguments } => {
                assert_eq!(name, "fetch_game_reviews");
                assert_eq!(arguments["game_title"], "Celeste");
            }
            other => panic!("expected a tool call, got {other:?}"),
        }
    }

    #[test]
    fn extract_reply_falls_back_to_text() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"content": "hello there"}}]}"#,
        )
        .expect("response should parse");

        assert_eq!(
            extract_reply(response).expect("reply should extract"),
            ModelReply::Text("hello there".to_string())
        );
    }

    #[test]
    fn empty_choices_are_malformed() {
        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": []}"#).expect("response should parse");
        assert!(matches!(
            extract_reply(response),
            Err(ChatModelError::Malformed(_))
        ));
    }

    #[test]
    fn parse_retry_after_reads_seconds() {
        let header = HeaderValue::from_static("30");
        assert_eq!(
            parse_retry_after(Some(&header)),
            Some(Duration::from_secs(30))
        );
        assert_eq!(parse_retry_after(None), None);
    }
}
