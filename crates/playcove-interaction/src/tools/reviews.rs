//! Review lookup tool.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Value, json};

use playcove_core::error::Result;
use playcove_core::game::{Game, GameRepository};
use playcove_core::review::{Review, ReviewRepository};
use playcove_core::user::UserRepository;

use super::{AgentTool, string_arg};
use crate::envelope::{GameCard, ReviewCard, ToolReply};
use crate::fallback;
use crate::title_match::resolve_by_title;

const MAX_REVIEWS: usize = 3;

/// Phrases that mean the user wanted the quiz, not reviews. The model is
/// told not to route these here, but it sometimes does anyway.
static QUIZ_PHRASES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)quiz|play|random|hint|guess").expect("static regex is valid"));

/// Fetches the top-rated reviews for a game named in free text.
pub struct ReviewLookupTool {
    games: Arc<dyn GameRepository>,
    reviews: Arc<dyn ReviewRepository>,
    users: Arc<dyn UserRepository>,
}

impl ReviewLookupTool {
    pub fn new(
        games: Arc<dyn GameRepository>,
        reviews: Arc<dyn ReviewRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            games,
            reviews,
            users,
        }
    }

    /// Top reviews for the resolved game: the catalog first, then the
    /// static fallback set (which only matches fallback game ids).
    async fn top_reviews(&self, game: &Game) -> Result<Vec<Review>> {
        let stored = self.reviews.top_rated_for_game(&game.id, MAX_REVIEWS).await?;
        if !stored.is_empty() {
            return Ok(stored);
        }

        let mut fallback = fallback::fallback_reviews_for(&game.id);
        fallback.sort_by(|a, b| b.rating.cmp(&a.rating));
        fallback.truncate(MAX_REVIEWS);
        Ok(fallback)
    }

    async fn username_for(&self, user_id: &str) -> String {
        match self.users.find_by_id(user_id).await {
            Ok(Some(user)) => user.username,
            _ => "unknown".to_string(),
        }
    }
}

#[async_trait::async_trait]
impl AgentTool for ReviewLookupTool {
    fn name(&self) -> &'static str {
        "fetch_game_reviews"
    }

    fn description(&self) -> &'static str {
        "Fetches the top 3 highest-rated reviews for a specific game title. \
         Use ONLY when the user explicitly asks for reviews or opinions about \
         a named game, never for quizzes or random games."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "game_title": {
                    "type": "string",
                    "description": "Title of the game, as the user wrote it"
                }
            },
            "required": ["game_title"]
        })
    }

    async fn execute(&self, arguments: &Value) -> Result<ToolReply> {
        let title = string_arg(arguments, "game_title").unwrap_or_default();
        tracing::info!(%title, "[ReviewLookupTool] Invoked");

        if title.trim().is_empty() || title.eq_ignore_ascii_case("random game") {
            return Ok(ToolReply::ReplyOnly(
                "Please tell me which game's reviews you'd like to see - for example, \
                 'show me reviews for Hollow Knight'."
                    .to_string(),
            ));
        }

        if QUIZ_PHRASES.is_match(title) {
            return Ok(ToolReply::ReplyOnly(
                "I can only show reviews for specific games. If you want to play a quiz, \
                 just say 'play a quiz'."
                    .to_string(),
            ));
        }

        let mut catalog = self.games.list_all().await?;
        if catalog.is_empty() {
            tracing::debug!("[ReviewLookupTool] Catalog empty, using fallback dataset");
            catalog = fallback::fallback_games().to_vec();
        }

        let Some(game) = resolve_by_title(&catalog, title).cloned() else {
            return Ok(ToolReply::ReplyOnly(format!(
                "I couldn't find a game called \"{title}\" in the catalog."
            )));
        };

        let reviews = self.top_reviews(&game).await?;
        if reviews.is_empty() {
            // An explicit message, not an empty success.
            return Ok(ToolReply::ReplyOnly(format!(
                "No reviews found for {} yet.",
                game.title
            )));
        }

        let mut cards = Vec::with_capacity(reviews.len());
        for review in &reviews {
            let username = self.username_for(&review.user_id).await;
            cards.push(ReviewCard::from_review(review, username, &game.title));
        }

        tracing::info!(
            game = %game.title,
            count = cards.len(),
            "[ReviewLookupTool] Reviews resolved"
        );
        Ok(ToolReply::ReviewList {
            reply: format!("Here are the top reviews for {}:", game.title),
            game: GameCard::from(&game),
            reviews: cards,
        })
    }
}
