//! Gateway dispatch and degradation behavior with a scripted model.

use std::sync::{Arc, Mutex};

use serde_json::json;

use playcove_core::error::CoveError;
use playcove_application::ChatGateway;
use playcove_infrastructure::{
    InMemoryGameRepository, InMemoryReviewRepository, InMemoryUserRepository,
};
use playcove_interaction::tools::{RandomGameTool, RecommendationTool, ReviewLookupTool};
use playcove_interaction::{
    AgentTool, ChatModel, ChatModelError, ChatRequest, ModelReply, ToolReply,
};

/// Model fake that replays a scripted sequence and records every request.
#[derive(Default)]
struct ScriptedChatModel {
    script: Mutex<Vec<Result<ModelReply, ChatModelError>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedChatModel {
    fn replying(replies: Vec<Result<ModelReply, ChatModelError>>) -> Self {
        Self {
            script: Mutex::new(replies),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ChatModel for ScriptedChatModel {
    async fn complete(&self, request: ChatRequest) -> Result<ModelReply, ChatModelError> {
        self.requests.lock().unwrap().push(request);
        let mut script = self.script.lock().unwrap();
        if script.is_empty() {
            return Ok(ModelReply::Text("script exhausted".to_string()));
        }
        script.remove(0)
    }
}

/// Tool fake that always fails; exercises the degradation path.
struct ExplodingTool;

#[async_trait::async_trait]
impl AgentTool for ExplodingTool {
    fn name(&self) -> &'static str {
        "exploding_tool"
    }

    fn description(&self) -> &'static str {
        "Always fails."
    }

    fn parameters(&self) -> serde_json::Value {
        json!({"type": "object", "properties": {}})
    }

    async fn execute(&self, _arguments: &serde_json::Value) -> playcove_core::Result<ToolReply> {
        Err(CoveError::data_access("store exploded"))
    }
}

fn default_tools() -> Vec<Arc<dyn AgentTool>> {
    let games = Arc::new(InMemoryGameRepository::new());
    let reviews = Arc::new(InMemoryReviewRepository::new());
    let users = Arc::new(InMemoryUserRepository::new());
    vec![
        Arc::new(ReviewLookupTool::new(
            games.clone(),
            reviews.clone(),
            users.clone(),
        )),
        Arc::new(RecommendationTool::new(games.clone())),
        Arc::new(RandomGameTool::new(games)),
    ]
}

#[tokio::test]
async fn plain_text_replies_become_reply_only_envelopes() {
    let model = Arc::new(ScriptedChatModel::replying(vec![Ok(ModelReply::Text(
        "Celeste is a platformer from 2018.".to_string(),
    ))]));
    let gateway = ChatGateway::new(model, default_tools()).unwrap();

    let envelope = gateway.chat("s-1", "tell me about Celeste").await;
    assert_eq!(envelope.reply, "Celeste is a platformer from 2018.");
    assert!(envelope.game.is_none());
    assert!(!envelope.quiz.active);
}

#[tokio::test]
async fn envelope_shaped_model_json_passes_through() {
    let raw = r#"{"reply": "Here you go", "reviews": [], "recommendations": [], "quiz": {"active": false, "hintNumber": null, "hint": null, "remainingAttempts": null}}"#;
    let model = Arc::new(ScriptedChatModel::replying(vec![Ok(ModelReply::Text(
        raw.to_string(),
    ))]));
    let gateway = ChatGateway::new(model, default_tools()).unwrap();

    let envelope = gateway.chat("s-1", "hello").await;
    assert_eq!(envelope.reply, "Here you go");
}

#[tokio::test]
async fn tool_calls_are_dispatched_and_merged() {
    let model = Arc::new(ScriptedChatModel::replying(vec![Ok(
        ModelReply::ToolCall {
            name: "start_game_quiz".to_string(),
            arguments: json!({}),
        },
    )]));
    let gateway = ChatGateway::new(model, default_tools()).unwrap();

    // The empty store falls back to the static catalog, so the quiz starts.
    let envelope = gateway.chat("s-1", "let's play a quiz").await;
    assert!(envelope.quiz.active);
    assert_eq!(envelope.quiz.hint_number, Some(1));
    assert_eq!(envelope.quiz.remaining_attempts, Some(5));
    assert!(envelope.game.is_some());
}

#[tokio::test]
async fn undeclared_tool_requests_degrade_to_a_reply() {
    let model = Arc::new(ScriptedChatModel::replying(vec![Ok(
        ModelReply::ToolCall {
            name: "not_a_tool".to_string(),
            arguments: json!({}),
        },
    )]));
    let gateway = ChatGateway::new(model, default_tools()).unwrap();

    let envelope = gateway.chat("s-1", "hm").await;
    assert!(envelope.reply.contains("capability"));
    assert!(envelope.reviews.is_empty());
    assert!(!envelope.quiz.active);
}

#[tokio::test]
async fn model_failures_degrade_to_a_reply() {
    let model = Arc::new(ScriptedChatModel::replying(vec![Err(
        ChatModelError::Request {
            message: "connection refused".to_string(),
            is_retryable: true,
        },
    )]));
    let gateway = ChatGateway::new(model, default_tools()).unwrap();

    let envelope = gateway.chat("s-1", "hello").await;
    assert!(envelope.reply.contains("Sorry"));
}

#[tokio::test]
async fn tool_failures_degrade_to_a_reply() {
    let model = Arc::new(ScriptedChatModel::replying(vec![Ok(
        ModelReply::ToolCall {
            name: "exploding_tool".to_string(),
            arguments: json!({}),
        },
    )]));
    let gateway = ChatGateway::new(model, vec![Arc::new(ExplodingTool)]).unwrap();

    let envelope = gateway.chat("s-1", "boom").await;
    assert!(envelope.reply.contains("try again"));
}

#[tokio::test]
async fn conversation_history_is_replayed_per_session() {
    let model = Arc::new(ScriptedChatModel::replying(vec![
        Ok(ModelReply::Text("first answer".to_string())),
        Ok(ModelReply::Text("second answer".to_string())),
    ]));
    let gateway = ChatGateway::new(model.clone(), default_tools()).unwrap();

    gateway.chat("s-1", "first question").await;
    gateway.chat("s-1", "second question").await;

    let requests = model.requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    // The second request carries the first exchange plus the new message.
    assert_eq!(requests[0].messages.len(), 1);
    assert_eq!(requests[1].messages.len(), 3);
    assert_eq!(requests[1].messages[0].content, "first question");
    assert!(requests[1].messages[1].content.contains("first answer"));

    // A different session starts clean.
    drop(requests);
    gateway.chat("s-2", "other session").await;
    let requests = model.requests.lock().unwrap();
    assert_eq!(requests[2].messages.len(), 1);
}

#[tokio::test]
async fn tool_turns_record_the_envelope_for_continuation() {
    let model = Arc::new(ScriptedChatModel::replying(vec![
        Ok(ModelReply::ToolCall {
            name: "start_game_quiz".to_string(),
            arguments: json!({}),
        }),
        Ok(ModelReply::Text("nope, guess again!".to_string())),
    ]));
    let gateway = ChatGateway::new(model.clone(), default_tools()).unwrap();

    gateway.chat("s-1", "quiz me").await;
    gateway.chat("s-1", "is it Celeste?").await;

    let requests = model.requests.lock().unwrap();
    // The assistant turn recorded after the tool call carries the quiz
    // state, so the model can check guesses from context alone.
    let recorded = &requests[1].messages[1].content;
    assert!(recorded.contains("\"active\":true"));
    assert!(recorded.contains("remainingAttempts"));
}
