//! Game catalog service.

use std::sync::Arc;

use chrono::NaiveDate;

use super::model::Game;
use super::repository::GameRepository;
use crate::error::{CoveError, Result};

/// Input for creating or refreshing a catalog entry.
#[derive(Debug, Clone)]
pub struct GameUpsert {
    pub external_id: String,
    pub title: String,
    pub description: String,
    pub cover_url: String,
    pub release_date: Option<NaiveDate>,
    pub platforms: Vec<String>,
    pub genres: Vec<String>,
}

/// Service for catalog reads and idempotent imports.
pub struct GameService {
    games: Arc<dyn GameRepository>,
}

impl GameService {
    pub fn new(games: Arc<dyn GameRepository>) -> Self {
        Self { games }
    }

    /// Creates the game, or updates the existing entry with the same
    /// external id. Repeating an import with identical input is a no-op
    /// apart from the write.
    pub async fn upsert(&self, input: GameUpsert) -> Result<Game> {
        if input.external_id.trim().is_empty() {
            return Err(CoveError::invalid_argument("external id cannot be empty"));
        }
        if input.title.trim().is_empty() {
            return Err(CoveError::invalid_argument("title cannot be empty"));
        }

        let mut game = match self.games.find_by_external_id(&input.external_id).await? {
            Some(existing) => {
                tracing::debug!(
                    external_id = %input.external_id,
                    "[GameService] Existing catalog entry found, updating"
                );
                existing
            }
            None => Game::new(input.external_id.clone(), input.title.clone()),
        };

        game.title = input.title;
        game.description = input.description;
        game.cover_url = input.cover_url;
        game.release_date = input.release_date;
        game.platforms = input.platforms;
        game.genres = input.genres;

        self.games.save(&game).await?;
        tracing::info!(game_id = %game.id, title = %game.title, "[GameService] Game upserted");
        Ok(game)
    }

    /// Returns the game with the given id, or `NotFound`.
    pub async fn get_by_id(&self, id: &str) -> Result<Game> {
        self.games
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoveError::not_found("game", id))
    }

    /// Finds a game by exact title.
    pub async fn find_by_title(&self, title: &str) -> Result<Option<Game>> {
        self.games.find_by_title(title).await
    }

    /// Lists the whole catalog.
    pub async fn list_all(&self) -> Result<Vec<Game>> {
        self.games.list_all().await
    }
}
