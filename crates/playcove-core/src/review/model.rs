//! Review domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Rating bounds, inclusive.
pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 10;

/// A user's review of a game.
///
/// References are by id only; there is no object graph between records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Unique review identifier (UUID format)
    pub id: String,
    pub user_id: String,
    pub game_id: String,
    /// Integer rating in `MIN_RATING..=MAX_RATING`
    pub rating: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Creates a new review stamped with the current time.
    pub fn new(
        user_id: impl Into<String>,
        game_id: impl Into<String>,
        rating: i32,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            game_id: game_id.into(),
            rating,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}
