//! Review service.
//!
//! Creation validates that the referenced user and game resolve and that the
//! rating is in range. Update and delete require the acting user to own the
//! review.

use std::sync::Arc;

use super::model::{MAX_RATING, MIN_RATING, Review};
use super::repository::ReviewRepository;
use crate::error::{CoveError, Result};
use crate::game::GameRepository;
use crate::user::UserRepository;

/// Input for posting a review.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub user_id: String,
    pub game_id: String,
    pub rating: i32,
    pub content: String,
}

/// Partial review update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ReviewUpdate {
    pub rating: Option<i32>,
    pub content: Option<String>,
}

/// Service for creating and mutating reviews.
pub struct ReviewService {
    reviews: Arc<dyn ReviewRepository>,
    users: Arc<dyn UserRepository>,
    games: Arc<dyn GameRepository>,
}

impl ReviewService {
    pub fn new(
        reviews: Arc<dyn ReviewRepository>,
        users: Arc<dyn UserRepository>,
        games: Arc<dyn GameRepository>,
    ) -> Self {
        Self {
            reviews,
            users,
            games,
        }
    }

    fn validate_rating(rating: i32) -> Result<()> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(CoveError::invalid_argument(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}"
            )));
        }
        Ok(())
    }

    /// Posts a new review.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the rating is out of range
    /// - `NotFound` if the user or game does not resolve
    pub async fn create_review(&self, input: NewReview) -> Result<Review> {
        Self::validate_rating(input.rating)?;

        if self.users.find_by_id(&input.user_id).await?.is_none() {
            return Err(CoveError::not_found("user", &input.user_id));
        }
        if self.games.find_by_id(&input.game_id).await?.is_none() {
            return Err(CoveError::not_found("game", &input.game_id));
        }

        let review = Review::new(input.user_id, input.game_id, input.rating, input.content);
        self.reviews.save(&review).await?;
        tracing::info!(
            review_id = %review.id,
            game_id = %review.game_id,
            "[ReviewService] Review created"
        );
        Ok(review)
    }

    /// Returns the review with the given id, or `NotFound`.
    pub async fn get_by_id(&self, id: &str) -> Result<Review> {
        self.reviews
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoveError::not_found("review", id))
    }

    /// Lists reviews for a game.
    pub async fn reviews_for_game(&self, game_id: &str) -> Result<Vec<Review>> {
        self.reviews.find_by_game(game_id).await
    }

    /// Lists reviews written by a user.
    pub async fn reviews_by_user(&self, user_id: &str) -> Result<Vec<Review>> {
        self.reviews.find_by_user(user_id).await
    }

    /// Updates a review owned by the acting user.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the review does not resolve
    /// - `Forbidden` if the acting user is not the author
    /// - `InvalidArgument` if the new rating is out of range
    pub async fn update_review(
        &self,
        review_id: &str,
        acting_user_id: &str,
        update: ReviewUpdate,
    ) -> Result<Review> {
        let mut review = self.get_by_id(review_id).await?;
        if review.user_id != acting_user_id {
            return Err(CoveError::forbidden("only the author can edit this review"));
        }

        if let Some(rating) = update.rating {
            Self::validate_rating(rating)?;
            review.rating = rating;
        }
        if let Some(content) = update.content {
            review.content = content;
        }

        self.reviews.save(&review).await?;
        tracing::info!(review_id = %review.id, "[ReviewService] Review updated");
        Ok(review)
    }

    /// Deletes a review owned by the acting user.
    pub async fn delete_review(&self, review_id: &str, acting_user_id: &str) -> Result<()> {
        let review = self.get_by_id(review_id).await?;
        if review.user_id != acting_user_id {
            return Err(CoveError::forbidden(
                "only the author can delete this review",
            ));
        }

        self.reviews.delete(review_id).await?;
        tracing::info!(review_id = %review_id, "[ReviewService] Review deleted");
        Ok(())
    }

    /// Average rating for a game, rounded to one decimal place.
    /// Returns 0.0 when the game has no reviews.
    pub async fn average_rating(&self, game_id: &str) -> Result<f64> {
        let reviews = self.reviews.find_by_game(game_id).await?;
        if reviews.is_empty() {
            return Ok(0.0);
        }

        let sum: i32 = reviews.iter().map(|r| r.rating).sum();
        let average = f64::from(sum) / reviews.len() as f64;
        Ok((average * 10.0).round() / 10.0)
    }
}
