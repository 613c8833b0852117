//! Game repository trait.

use super::model::Game;
use crate::error::Result;

/// An abstract repository for the game catalog.
///
/// Lookup keys mirror the access patterns of the services: by id, by the
/// upstream external id (imports), and by exact title. Approximate title
/// matching is layered on top of `list_all` by the shared title resolver
/// rather than pushed into every store implementation.
#[async_trait::async_trait]
pub trait GameRepository: Send + Sync {
    /// Finds a game by its id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Game>>;

    /// Finds a game by its upstream catalog id.
    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<Game>>;

    /// Finds a game by exact title.
    async fn find_by_title(&self, title: &str) -> Result<Option<Game>>;

    /// Saves a game, inserting or replacing by id.
    async fn save(&self, game: &Game) -> Result<()>;

    /// Lists the whole catalog.
    async fn list_all(&self) -> Result<Vec<Game>>;
}
