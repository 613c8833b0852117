//! The fixed chat response envelope and the typed tool results that feed it.
//!
//! Every chat turn produces the same JSON shape regardless of which (if any)
//! tool fired. Tools return a tagged `ToolReply`; the gateway converts it to
//! the envelope at the boundary, and anything unparseable from the model
//! degrades to a reply-only envelope.

use serde::{Deserialize, Serialize};

use playcove_core::game::Game;
use playcove_core::review::Review;

/// Descriptive card for a single game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCard {
    pub id: String,
    pub external_id: String,
    pub title: String,
    pub description: String,
    pub cover_image_url: String,
    /// `YYYY-MM-DD`
    pub release_date: Option<String>,
    pub platforms: Vec<String>,
    pub genres: Vec<String>,
}

impl From<&Game> for GameCard {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id.clone(),
            external_id: game.external_id.clone(),
            title: game.title.clone(),
            description: game.description.clone(),
            cover_image_url: game.cover_url.clone(),
            release_date: game.release_date.map(|d| d.to_string()),
            platforms: game.platforms.clone(),
            genres: game.genres.clone(),
        }
    }
}

/// One review as surfaced to the assistant UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCard {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub game_id: String,
    pub game_title: String,
    pub rating: i32,
    pub content: String,
    pub created_at: String,
}

impl ReviewCard {
    /// Builds a card from a review; the username is resolved by the caller
    /// since reviews reference users by id only.
    pub fn from_review(review: &Review, username: impl Into<String>, game_title: &str) -> Self {
        Self {
            id: review.id.clone(),
            user_id: review.user_id.clone(),
            username: username.into(),
            game_id: review.game_id.clone(),
            game_title: game_title.to_string(),
            rating: review.rating,
            content: review.content.clone(),
            created_at: review.created_at.to_rfc3339(),
        }
    }
}

/// A recommended game. Fallback recommendations carry no catalog id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationCard {
    pub id: Option<String>,
    pub title: String,
    pub cover_image_url: String,
    pub genres: Vec<String>,
}

impl From<&Game> for RecommendationCard {
    fn from(game: &Game) -> Self {
        Self {
            id: Some(game.id.clone()),
            title: game.title.clone(),
            cover_image_url: game.cover_url.clone(),
            genres: game.genres.clone(),
        }
    }
}

/// Quiz progress carried in the envelope. All-null/false when no quiz is in
/// progress.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizState {
    #[serde(default)]
    pub active: bool,
    pub hint_number: Option<u32>,
    pub hint: Option<String>,
    pub remaining_attempts: Option<u32>,
}

impl QuizState {
    /// Initial state for a freshly started quiz.
    pub fn started(first_hint: impl Into<String>) -> Self {
        Self {
            active: true,
            hint_number: Some(1),
            hint: Some(first_hint.into()),
            remaining_attempts: Some(5),
        }
    }
}

/// The fixed response shape every chat turn produces.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatEnvelope {
    #[serde(default)]
    pub reply: String,
    #[serde(default)]
    pub game: Option<GameCard>,
    #[serde(default)]
    pub reviews: Vec<ReviewCard>,
    #[serde(default)]
    pub recommendations: Vec<RecommendationCard>,
    #[serde(default)]
    pub quiz: QuizState,
}

impl ChatEnvelope {
    /// An envelope carrying only conversational text.
    pub fn reply_only(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            ..Self::default()
        }
    }

    /// Normalizes raw model output into an envelope.
    ///
    /// The model is instructed to answer with envelope-shaped JSON; when it
    /// does, the parsed envelope is used as-is. Anything else (plain prose,
    /// broken JSON, a JSON value of the wrong shape) becomes the `reply` of
    /// an otherwise-empty envelope rather than an error.
    pub fn from_model_text(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with('{') {
            if let Ok(envelope) = serde_json::from_str::<ChatEnvelope>(trimmed) {
                return envelope;
            }
            tracing::debug!("Model output looked like JSON but did not match the envelope");
        }
        Self::reply_only(trimmed)
    }
}

/// Typed result of a tool invocation.
///
/// Tools never build envelopes directly; the fixed shape is applied in one
/// place, here, when the gateway emits the response.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolReply {
    /// Explanatory text only (also used for tool-level refusals)
    ReplyOnly(String),
    /// Descriptive information about one game
    GameInfo { reply: String, game: GameCard },
    /// Reviews for a resolved game
    ReviewList {
        reply: String,
        game: GameCard,
        reviews: Vec<ReviewCard>,
    },
    /// Similar-game recommendations
    RecommendationList {
        reply: String,
        recommendations: Vec<RecommendationCard>,
    },
    /// A freshly started guess-the-game quiz
    QuizStart {
        reply: String,
        game: GameCard,
        quiz: QuizState,
    },
}

impl ToolReply {
    /// Converts the typed result into the fixed envelope shape.
    pub fn into_envelope(self) -> ChatEnvelope {
        match self {
            ToolReply::ReplyOnly(reply) => ChatEnvelope::reply_only(reply),
            ToolReply::GameInfo { reply, game } => ChatEnvelope {
                reply,
                game: Some(game),
                ..ChatEnvelope::default()
            },
            ToolReply::ReviewList {
                reply,
                game,
                reviews,
            } => ChatEnvelope {
                reply,
                game: Some(game),
                reviews,
                ..ChatEnvelope::default()
            },
            ToolReply::RecommendationList {
                reply,
                recommendations,
            } => ChatEnvelope {
                reply,
                recommendations,
                ..ChatEnvelope::default()
            },
            ToolReply::QuizStart { reply, game, quiz } => ChatEnvelope {
                reply,
                game: Some(game),
                quiz,
                ..ChatEnvelope::default()
            },
        }
    }
}
