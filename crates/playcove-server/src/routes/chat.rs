//! Assistant chat handler.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use playcove_interaction::ChatEnvelope;

use crate::auth::MaybeUser;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequestBody {
    pub message: String,
    /// Conversation key; defaults to the authenticated user's id
    pub session_key: Option<String>,
}

/// Runs one chat turn. The gateway guarantees a fully shaped envelope, so
/// the only client error here is an empty message.
pub async fn chat(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Json(request): Json<ChatRequestBody>,
) -> Result<Json<ChatEnvelope>, ApiError> {
    if request.message.trim().is_empty() {
        return Err(ApiError::bad_request("message is required"));
    }

    let session_key = request
        .session_key
        .or_else(|| user.map(|u| u.id))
        .unwrap_or_else(|| "anonymous".to_string());

    let envelope = state.chat.chat(&session_key, request.message.trim()).await;
    Ok(Json(envelope))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use playcove_core::config::AppConfig;

    #[tokio::test]
    async fn blank_messages_are_rejected() {
        let state = AppState::build(&AppConfig::default()).unwrap();

        let err = chat(
            State(state),
            MaybeUser(None),
            Json(ChatRequestBody {
                message: "   ".to_string(),
                session_key: None,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn chat_always_returns_a_full_envelope() {
        let state = AppState::build(&AppConfig::default()).unwrap();

        let Json(envelope) = chat(
            State(state),
            MaybeUser(None),
            Json(ChatRequestBody {
                message: "hello".to_string(),
                session_key: Some("test-session".to_string()),
            }),
        )
        .await
        .unwrap();

        assert!(!envelope.reply.is_empty());
        assert!(envelope.reviews.is_empty());
        assert!(envelope.recommendations.is_empty());
        assert!(!envelope.quiz.active);
    }
}
