//! In-memory review store.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use playcove_core::error::Result;
use playcove_core::review::{Review, ReviewRepository};

/// `ReviewRepository` backed by a `RwLock`-guarded map keyed by review id.
#[derive(Default)]
pub struct InMemoryReviewRepository {
    reviews: Arc<RwLock<HashMap<String, Review>>>,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Review>> {
        let reviews = self.reviews.read().await;
        Ok(reviews.get(id).cloned())
    }

    async fn find_by_game(&self, game_id: &str) -> Result<Vec<Review>> {
        let reviews = self.reviews.read().await;
        let mut matching: Vec<Review> = reviews
            .values()
            .filter(|r| r.game_id == game_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(matching)
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Review>> {
        let reviews = self.reviews.read().await;
        let mut matching: Vec<Review> = reviews
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(matching)
    }

    async fn top_rated_for_game(&self, game_id: &str, limit: usize) -> Result<Vec<Review>> {
        let mut matching = self.find_by_game(game_id).await?;
        matching.sort_by(|a, b| b.rating.cmp(&a.rating));
        matching.truncate(limit);
        Ok(matching)
    }

    async fn save(&self, review: &Review) -> Result<()> {
        let mut reviews = self.reviews.write().await;
        reviews.insert(review.id.clone(), review.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut reviews = self.reviews.write().await;
        reviews.remove(id);
        Ok(())
    }
}
