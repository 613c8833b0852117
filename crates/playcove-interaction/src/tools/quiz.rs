//! Guess-the-game quiz starter.

use std::sync::Arc;

use rand::Rng;
use serde_json::{Value, json};

use playcove_core::error::Result;
use playcove_core::game::{Game, GameRepository};

use super::AgentTool;
use crate::envelope::{GameCard, QuizState, ToolReply};
use crate::fallback;

const DESCRIPTION_SNIPPET_LEN: usize = 150;

/// Picks a random game and opens a quiz with the first of five hints.
///
/// Hint progression, guess checking, and attempt counting are driven by the
/// model from the conversation; this tool only supplies the opening state.
pub struct RandomGameTool {
    games: Arc<dyn GameRepository>,
}

impl RandomGameTool {
    pub fn new(games: Arc<dyn GameRepository>) -> Self {
        Self { games }
    }
}

/// Builds hint `hint_number` (1-5) for a game, each one more specific than
/// the last: title initials, genres, release year, platforms, description
/// snippet.
pub fn hint_for(game: &Game, hint_number: u32) -> String {
    match hint_number {
        1 => {
            let initials: String = game
                .title
                .split_whitespace()
                .filter_map(|word| word.chars().next())
                .map(|c| format!("{c}."))
                .collect();
            format!("The game's title is abbreviated as: {initials}")
        }
        2 => {
            if game.genres.is_empty() {
                "It's a game of an unspecified genre.".to_string()
            } else {
                format!("It's a {} game.", game.genres.join(" or "))
            }
        }
        3 => match game.release_date {
            Some(date) => {
                use chrono::Datelike;
                format!("It was released in the year {}.", date.year())
            }
            None => "The release date is not specified.".to_string(),
        },
        4 => {
            if game.platforms.is_empty() {
                "Platform information is not available for this game.".to_string()
            } else {
                format!("You can play it on: {}", game.platforms.join(", "))
            }
        }
        _ => {
            if game.description.is_empty() {
                "No description available for this game.".to_string()
            } else {
                let snippet: String = game
                    .description
                    .chars()
                    .take(DESCRIPTION_SNIPPET_LEN)
                    .collect();
                if game.description.chars().count() > DESCRIPTION_SNIPPET_LEN {
                    format!("Description: {snippet}...")
                } else {
                    format!("Description: {snippet}")
                }
            }
        }
    }
}

#[async_trait::async_trait]
impl AgentTool for RandomGameTool {
    fn name(&self) -> &'static str {
        "start_game_quiz"
    }

    fn description(&self) -> &'static str {
        "Selects a random game from the catalog and starts a guess-the-game \
         quiz. Use when the user wants to play a quiz or guessing game. \
         Takes no arguments."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _arguments: &Value) -> Result<ToolReply> {
        tracing::info!("[RandomGameTool] Starting quiz");

        let mut games = self.games.list_all().await?;
        if games.is_empty() {
            tracing::debug!("[RandomGameTool] Catalog empty, using fallback dataset");
            games = fallback::fallback_games().to_vec();
        }
        if games.is_empty() {
            return Ok(ToolReply::ReplyOnly(
                "It seems there was an issue starting the quiz - no games are available."
                    .to_string(),
            ));
        }

        let picked = &games[rand::thread_rng().gen_range(0..games.len())];
        tracing::debug!(title = %picked.title, "[RandomGameTool] Game selected");

        let first_hint = hint_for(picked, 1);
        let reply = format!(
            "Let's play! I'm thinking of a game.\n\nHint #1: {first_hint}\n\nYou have 5 attempts. Type your guess!"
        );

        Ok(ToolReply::QuizStart {
            reply,
            game: GameCard::from(picked),
            quiz: QuizState::started(first_hint),
        })
    }
}
