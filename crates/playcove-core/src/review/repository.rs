//! Review repository trait.

use super::model::Review;
use crate::error::Result;

/// An abstract repository for review persistence.
#[async_trait::async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Finds a review by its id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Review>>;

    /// Lists all reviews for a game.
    async fn find_by_game(&self, game_id: &str) -> Result<Vec<Review>>;

    /// Lists all reviews written by a user.
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Review>>;

    /// Returns up to `limit` reviews for a game, highest rating first.
    async fn top_rated_for_game(&self, game_id: &str, limit: usize) -> Result<Vec<Review>>;

    /// Saves a review, inserting or replacing by id.
    async fn save(&self, review: &Review) -> Result<()>;

    /// Deletes a review by id. Deleting a missing review is not an error.
    async fn delete(&self, id: &str) -> Result<()>;
}
