//! User domain model.
//!
//! A user record as stored by the platform: identity-provider subject,
//! public profile fields, per-platform gamertags, and the visibility
//! setting that gates who may read those gamertags.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

/// Controls who may see a user's gamertag mapping.
///
/// `Friends` is the default; anything the viewer is not entitled to see is
/// simply omitted from profile responses.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GamertagVisibility {
    Public,
    #[default]
    Friends,
}

/// User domain model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID format)
    pub id: String,
    /// Identity-provider subject id (unique)
    pub subject_id: String,
    /// Unique display handle
    pub username: String,
    /// Email as asserted by the identity provider
    pub email: Option<String>,
    /// Free-text bio
    pub bio: Option<String>,
    /// Avatar image URL
    pub avatar_url: Option<String>,
    /// Platforms the user prefers to play on
    #[serde(default)]
    pub preferred_platforms: Vec<String>,
    /// Ids of games the user has marked as favorites
    #[serde(default)]
    pub favorite_game_ids: Vec<String>,
    /// Platform name -> gamertag on that platform
    #[serde(default)]
    pub gamertags: HashMap<String, String>,
    /// Who may see the gamertag mapping
    #[serde(default)]
    pub gamertags_visibility: GamertagVisibility,
}

impl User {
    /// Creates a new user with a fresh id and default visibility.
    pub fn new(subject_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            subject_id: subject_id.into(),
            username: username.into(),
            email: None,
            bio: None,
            avatar_url: None,
            preferred_platforms: Vec::new(),
            favorite_game_ids: Vec::new(),
            gamertags: HashMap::new(),
            gamertags_visibility: GamertagVisibility::default(),
        }
    }

    /// Sets or replaces the gamertag for a platform.
    pub fn add_gamertag(&mut self, platform: impl Into<String>, gamertag: impl Into<String>) {
        self.gamertags.insert(platform.into(), gamertag.into());
    }

    /// Removes the gamertag for a platform, if present.
    pub fn remove_gamertag(&mut self, platform: &str) {
        self.gamertags.remove(platform);
    }

    /// Returns the gamertag for a platform, if set.
    pub fn gamertag(&self, platform: &str) -> Option<&str> {
        self.gamertags.get(platform).map(String::as_str)
    }

    /// Adds a favorite game id. Already-present ids are left untouched.
    pub fn add_favorite_game(&mut self, game_id: impl Into<String>) {
        let game_id = game_id.into();
        if !self.favorite_game_ids.contains(&game_id) {
            self.favorite_game_ids.push(game_id);
        }
    }

    /// Removes a favorite game id, if present.
    pub fn remove_favorite_game(&mut self, game_id: &str) {
        self.favorite_game_ids.retain(|id| id != game_id);
    }

    /// Whether the game id is in the user's favorites.
    pub fn has_favorite_game(&self, game_id: &str) -> bool {
        self.favorite_game_ids.iter().any(|id| id == game_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_favorite_game_is_idempotent() {
        let mut user = User::new("sub-1", "ezra");
        user.add_favorite_game("g-1");
        user.add_favorite_game("g-1");
        assert_eq!(user.favorite_game_ids, vec!["g-1".to_string()]);
    }

    #[test]
    fn gamertag_roundtrip() {
        let mut user = User::new("sub-1", "ezra");
        user.add_gamertag("steam", "ezra_77");
        assert_eq!(user.gamertag("steam"), Some("ezra_77"));
        user.remove_gamertag("steam");
        assert_eq!(user.gamertag("steam"), None);
    }

    #[test]
    fn visibility_defaults_to_friends() {
        let user = User::new("sub-1", "ezra");
        assert_eq!(user.gamertags_visibility, GamertagVisibility::Friends);
    }
}
