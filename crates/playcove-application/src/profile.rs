//! Visibility-gated profile views.
//!
//! Profile responses never carry gamertags the viewer is not entitled to
//! see; the gate is applied here, once, before anything leaves the
//! application layer.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use playcove_core::error::Result;
use playcove_core::friendship::FriendshipService;
use playcove_core::user::{GamertagVisibility, User, UserService};

/// A user profile as exposed to a particular viewer.
///
/// `gamertags` is `None` when the viewer may not see them, as opposed to an
/// empty map, which means the owner has none set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub id: String,
    pub username: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub preferred_platforms: Vec<String>,
    pub favorite_game_ids: Vec<String>,
    pub gamertags_visibility: GamertagVisibility,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gamertags: Option<HashMap<String, String>>,
}

/// Builds profile views with the visibility rule applied.
pub struct ProfileUseCase {
    users: Arc<UserService>,
    friendships: Arc<FriendshipService>,
}

impl ProfileUseCase {
    pub fn new(users: Arc<UserService>, friendships: Arc<FriendshipService>) -> Self {
        Self { users, friendships }
    }

    /// Returns the profile of `profile_user_id` as seen by `viewer_id`.
    ///
    /// An anonymous viewer (`None`) is treated as a stranger: they see
    /// gamertags only on public profiles.
    pub async fn view_profile(
        &self,
        profile_user_id: &str,
        viewer_id: Option<&str>,
    ) -> Result<ProfileView> {
        let user = self.users.get_by_id(profile_user_id).await?;

        let can_view = match viewer_id {
            Some(viewer) => {
                self.friendships
                    .can_view_gamertags(&user.id, viewer, user.gamertags_visibility)
                    .await?
            }
            None => user.gamertags_visibility == GamertagVisibility::Public,
        };

        Ok(Self::render(user, can_view))
    }

    fn render(user: User, include_gamertags: bool) -> ProfileView {
        ProfileView {
            id: user.id,
            username: user.username,
            bio: user.bio,
            avatar_url: user.avatar_url,
            preferred_platforms: user.preferred_platforms,
            favorite_game_ids: user.favorite_game_ids,
            gamertags_visibility: user.gamertags_visibility,
            gamertags: include_gamertags.then_some(user.gamertags),
        }
    }
}
