//! In-memory game catalog store.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use playcove_core::error::Result;
use playcove_core::game::{Game, GameRepository};

/// `GameRepository` backed by a `RwLock`-guarded map keyed by game id.
///
/// Iteration order is made deterministic by sorting `list_all` on title;
/// the title resolver's tie-break depends on a stable catalog order.
#[derive(Default)]
pub struct InMemoryGameRepository {
    games: Arc<RwLock<HashMap<String, Game>>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Game>> {
        let games = self.games.read().await;
        Ok(games.get(id).cloned())
    }

    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<Game>> {
        let games = self.games.read().await;
        Ok(games
            .values()
            .find(|g| g.external_id == external_id)
            .cloned())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Game>> {
        let games = self.games.read().await;
        Ok(games.values().find(|g| g.title == title).cloned())
    }

    async fn save(&self, game: &Game) -> Result<()> {
        let mut games = self.games.write().await;
        games.insert(game.id.clone(), game.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Game>> {
        let games = self.games.read().await;
        let mut all: Vec<Game> = games.values().cloned().collect();
        all.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(all)
    }
}
