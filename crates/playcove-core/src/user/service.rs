//! User service for profile management.

use std::sync::Arc;

use super::model::{GamertagVisibility, User};
use super::repository::UserRepository;
use crate::error::{CoveError, Result};

/// Input for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub subject_id: String,
    pub username: String,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

/// Partial profile update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub preferred_platforms: Option<Vec<String>>,
    pub favorite_game_ids: Option<Vec<String>>,
}

/// Service for creating and mutating user profiles.
///
/// All operations are stateless request units against the repository; the
/// service holds no cross-request mutable state.
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Creates a new user after validating required fields and uniqueness.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the subject id or username is blank
    /// - `Conflict` if the username or subject id is already taken
    pub async fn create_user(&self, new_user: NewUser) -> Result<User> {
        tracing::info!(
            subject_id = %new_user.subject_id,
            username = %new_user.username,
            "[UserService] Creating user"
        );

        if new_user.subject_id.trim().is_empty() {
            return Err(CoveError::invalid_argument("subject id cannot be empty"));
        }
        if new_user.username.trim().is_empty() {
            return Err(CoveError::invalid_argument("username cannot be empty"));
        }

        if self.users.find_by_username(&new_user.username).await?.is_some() {
            return Err(CoveError::conflict(format!(
                "username already exists: {}",
                new_user.username
            )));
        }
        if self.users.find_by_subject(&new_user.subject_id).await?.is_some() {
            return Err(CoveError::conflict(
                "a user with this subject id already exists",
            ));
        }

        let mut user = User::new(new_user.subject_id, new_user.username);
        user.email = new_user.email;
        user.bio = new_user.bio;
        user.avatar_url = new_user.avatar_url;

        self.users.save(&user).await?;
        tracing::info!(user_id = %user.id, "[UserService] User created");
        Ok(user)
    }

    /// Returns the user with the given id, or `NotFound`.
    pub async fn get_by_id(&self, id: &str) -> Result<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoveError::not_found("user", id))
    }

    /// Returns the user with the given username, or `NotFound`.
    pub async fn get_by_username(&self, username: &str) -> Result<User> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or_else(|| CoveError::not_found("user", username))
    }

    /// Finds the user registered for an identity-provider subject, if any.
    pub async fn find_by_subject(&self, subject_id: &str) -> Result<Option<User>> {
        self.users.find_by_subject(subject_id).await
    }

    /// Applies a partial profile update to an existing user.
    pub async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<User> {
        let mut user = self.get_by_id(user_id).await?;

        if let Some(bio) = update.bio {
            user.bio = Some(bio);
        }
        if let Some(avatar_url) = update.avatar_url {
            user.avatar_url = Some(avatar_url);
        }
        if let Some(platforms) = update.preferred_platforms {
            user.preferred_platforms = platforms;
        }
        if let Some(game_ids) = update.favorite_game_ids {
            user.favorite_game_ids = game_ids;
        }

        self.users.save(&user).await?;
        tracing::info!(user_id = %user.id, "[UserService] Profile updated");
        Ok(user)
    }

    /// Changes who may see the user's gamertags.
    pub async fn update_gamertags_visibility(
        &self,
        user_id: &str,
        visibility: GamertagVisibility,
    ) -> Result<User> {
        let mut user = self.get_by_id(user_id).await?;
        user.gamertags_visibility = visibility;
        self.users.save(&user).await?;
        tracing::info!(user_id = %user.id, %visibility, "[UserService] Gamertags visibility updated");
        Ok(user)
    }

    /// Sets or replaces the gamertag for one platform.
    pub async fn add_gamertag(&self, user_id: &str, platform: &str, gamertag: &str) -> Result<User> {
        if platform.trim().is_empty() || gamertag.trim().is_empty() {
            return Err(CoveError::invalid_argument(
                "platform and gamertag cannot be empty",
            ));
        }

        let mut user = self.get_by_id(user_id).await?;
        user.add_gamertag(platform, gamertag);
        self.users.save(&user).await?;
        Ok(user)
    }

    /// Removes the gamertag for one platform.
    pub async fn remove_gamertag(&self, user_id: &str, platform: &str) -> Result<User> {
        let mut user = self.get_by_id(user_id).await?;
        user.remove_gamertag(platform);
        self.users.save(&user).await?;
        Ok(user)
    }

    /// Adds a game to the user's favorites (idempotent).
    pub async fn add_favorite_game(&self, user_id: &str, game_id: &str) -> Result<User> {
        let mut user = self.get_by_id(user_id).await?;
        user.add_favorite_game(game_id);
        self.users.save(&user).await?;
        Ok(user)
    }

    /// Removes a game from the user's favorites.
    pub async fn remove_favorite_game(&self, user_id: &str, game_id: &str) -> Result<User> {
        let mut user = self.get_by_id(user_id).await?;
        user.remove_favorite_game(game_id);
        self.users.save(&user).await?;
        Ok(user)
    }

    /// Returns the user's favorite game ids.
    pub async fn favorite_games(&self, user_id: &str) -> Result<Vec<String>> {
        Ok(self.get_by_id(user_id).await?.favorite_game_ids)
    }
}
