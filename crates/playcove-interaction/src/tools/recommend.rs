//! Similar-game recommendation tool.

use std::sync::Arc;

use serde_json::{Value, json};

use playcove_core::error::Result;
use playcove_core::game::GameRepository;

use super::{AgentTool, string_arg};
use crate::envelope::{RecommendationCard, ToolReply};
use crate::fallback::POPULAR_TITLES;
use crate::title_match::find_exact_ignore_case;

/// Resolves model-suggested similar titles against the catalog.
///
/// The model supplies the candidates; this tool only verifies which of them
/// exist and returns their cards. An unknown primary title degrades to a
/// static list of well-known games rather than a failure.
pub struct RecommendationTool {
    games: Arc<dyn GameRepository>,
}

impl RecommendationTool {
    pub fn new(games: Arc<dyn GameRepository>) -> Self {
        Self { games }
    }

    fn fallback_reply(primary: &str) -> ToolReply {
        let recommendations = POPULAR_TITLES
            .iter()
            .map(|title| RecommendationCard {
                id: None,
                title: title.to_string(),
                cover_image_url: String::new(),
                genres: vec!["Action".to_string(), "Adventure".to_string()],
            })
            .collect();

        ToolReply::RecommendationList {
            reply: format!(
                "I couldn't find information about \"{primary}\", but here are some \
                 popular games you might like:"
            ),
            recommendations,
        }
    }
}

#[async_trait::async_trait]
impl AgentTool for RecommendationTool {
    fn name(&self) -> &'static str {
        "recommend_similar_games"
    }

    fn description(&self) -> &'static str {
        "Recommends games similar to a named game. Provide the main game \
         title plus up to three similar game titles you consider good \
         matches. Use ONLY when the user explicitly asks for similar or \
         alternative games."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "game_title": {
                    "type": "string",
                    "description": "The game the user wants alternatives to"
                },
                "similar1": { "type": "string", "description": "First similar title" },
                "similar2": { "type": "string", "description": "Second similar title" },
                "similar3": { "type": "string", "description": "Third similar title" }
            },
            "required": ["game_title"]
        })
    }

    async fn execute(&self, arguments: &Value) -> Result<ToolReply> {
        let primary = string_arg(arguments, "game_title").unwrap_or_default().trim();
        tracing::info!(%primary, "[RecommendationTool] Invoked");

        if primary.is_empty() {
            return Ok(ToolReply::ReplyOnly(
                "Please tell me which game you'd like recommendations for.".to_string(),
            ));
        }

        let catalog = self.games.list_all().await?;

        if find_exact_ignore_case(&catalog, primary).is_none() {
            tracing::debug!(%primary, "[RecommendationTool] Primary title not in catalog, using fallback list");
            return Ok(Self::fallback_reply(primary));
        }

        let candidates = ["similar1", "similar2", "similar3"]
            .iter()
            .filter_map(|key| string_arg(arguments, key))
            .map(str::trim)
            .filter(|title| !title.is_empty());

        let mut recommendations = Vec::new();
        for candidate in candidates {
            if let Some(game) = find_exact_ignore_case(&catalog, candidate) {
                recommendations.push(RecommendationCard::from(game));
            }
        }

        let reply = if recommendations.is_empty() {
            format!("I couldn't find any similar games to {primary}.")
        } else {
            format!("Here are some games similar to {primary}:")
        };

        tracing::info!(
            %primary,
            resolved = recommendations.len(),
            "[RecommendationTool] Recommendations resolved"
        );
        Ok(ToolReply::RecommendationList {
            reply,
            recommendations,
        })
    }
}
