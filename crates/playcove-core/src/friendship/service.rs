//! Friendship state machine and the gamertag visibility rule.
//!
//! Transitions: `Pending -> Accepted`, `Pending -> Declined`, and deletion
//! from any state. Only the receiver may accept or decline; either party may
//! remove the record.

use std::sync::Arc;

use super::model::{Friendship, FriendshipStatus};
use super::repository::FriendshipRepository;
use crate::error::{CoveError, Result};
use crate::user::{GamertagVisibility, User, UserRepository};

/// Service owning the friendship lifecycle and the derived predicates used
/// for profile visibility.
pub struct FriendshipService {
    friendships: Arc<dyn FriendshipRepository>,
    users: Arc<dyn UserRepository>,
}

impl FriendshipService {
    pub fn new(friendships: Arc<dyn FriendshipRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self {
            friendships,
            users,
        }
    }

    async fn require_user(&self, user_id: &str) -> Result<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| CoveError::not_found("user", user_id))
    }

    /// Sends a friend request from `requester_id` to `receiver_id`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if either user does not resolve
    /// - `InvalidArgument` if the request is self-referential
    /// - `Conflict` if a record already exists between the pair, in either
    ///   direction
    pub async fn send_friend_request(
        &self,
        requester_id: &str,
        receiver_id: &str,
    ) -> Result<Friendship> {
        tracing::info!(%requester_id, %receiver_id, "[FriendshipService] Send friend request");

        self.require_user(requester_id).await?;
        self.require_user(receiver_id).await?;

        if requester_id == receiver_id {
            return Err(CoveError::invalid_argument(
                "cannot send a friend request to yourself",
            ));
        }

        if self
            .friendships
            .find_by_pair(requester_id, receiver_id)
            .await?
            .is_some()
        {
            return Err(CoveError::conflict(
                "a friendship record already exists between these users",
            ));
        }

        let friendship = Friendship::new_request(requester_id, receiver_id);
        // The store re-checks the canonical pair key on insert, closing the
        // race between two concurrent opposite-direction requests.
        self.friendships.insert(&friendship).await?;

        tracing::info!(friendship_id = %friendship.id, "[FriendshipService] Friend request sent");
        Ok(friendship)
    }

    /// Accepts a pending request. Only the receiver may accept.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the friendship id does not resolve
    /// - `Forbidden` if the acting user is not the receiver
    /// - `Conflict` if the request was already accepted
    pub async fn accept_friend_request(
        &self,
        friendship_id: &str,
        acting_user_id: &str,
    ) -> Result<Friendship> {
        tracing::info!(%friendship_id, %acting_user_id, "[FriendshipService] Accept friend request");

        let acting_user = acting_user_id.to_string();
        let updated = self
            .friendships
            .update(
                friendship_id,
                Box::new(move |friendship| {
                    if friendship.receiver_id != acting_user {
                        return Err(CoveError::forbidden(
                            "only the receiver can accept this request",
                        ));
                    }
                    if friendship.is_accepted() {
                        return Err(CoveError::conflict("friend request already accepted"));
                    }
                    friendship.status = FriendshipStatus::Accepted;
                    Ok(())
                }),
            )
            .await?;

        tracing::info!(friendship_id = %updated.id, "[FriendshipService] Friend request accepted");
        Ok(updated)
    }

    /// Declines a pending request. Only the receiver may decline; repeating
    /// a decline is allowed.
    pub async fn decline_friend_request(
        &self,
        friendship_id: &str,
        acting_user_id: &str,
    ) -> Result<Friendship> {
        tracing::info!(%friendship_id, %acting_user_id, "[FriendshipService] Decline friend request");

        let acting_user = acting_user_id.to_string();
        let updated = self
            .friendships
            .update(
                friendship_id,
                Box::new(move |friendship| {
                    if friendship.receiver_id != acting_user {
                        return Err(CoveError::forbidden(
                            "only the receiver can decline this request",
                        ));
                    }
                    friendship.status = FriendshipStatus::Declined;
                    Ok(())
                }),
            )
            .await?;

        tracing::info!(friendship_id = %updated.id, "[FriendshipService] Friend request declined");
        Ok(updated)
    }

    /// Hard-deletes a friendship. Either party may remove it.
    pub async fn remove_friendship(&self, friendship_id: &str, acting_user_id: &str) -> Result<()> {
        tracing::info!(%friendship_id, %acting_user_id, "[FriendshipService] Remove friendship");

        let acting_user = acting_user_id.to_string();
        self.friendships
            .remove(
                friendship_id,
                Box::new(move |friendship| {
                    if !friendship.involves(&acting_user) {
                        return Err(CoveError::forbidden("you are not part of this friendship"));
                    }
                    Ok(())
                }),
            )
            .await?;

        tracing::info!(%friendship_id, "[FriendshipService] Friendship removed");
        Ok(())
    }

    /// Whether the two users are friends.
    ///
    /// A user is always friends with themselves; otherwise true iff an
    /// accepted record exists between the pair, in either direction. Users
    /// that do not resolve are never friends with anyone else.
    pub async fn are_friends(&self, user_a: &str, user_b: &str) -> Result<bool> {
        if user_a == user_b {
            return Ok(true);
        }

        if self.users.find_by_id(user_a).await?.is_none()
            || self.users.find_by_id(user_b).await?.is_none()
        {
            return Ok(false);
        }

        Ok(self
            .friendships
            .find_by_pair(user_a, user_b)
            .await?
            .is_some_and(|friendship| friendship.is_accepted()))
    }

    /// Whether `viewer_id` may see the gamertags of `profile_owner_id`.
    ///
    /// Owners always see their own tags; public tags are visible to
    /// everyone; friends-only tags require an accepted friendship.
    pub async fn can_view_gamertags(
        &self,
        profile_owner_id: &str,
        viewer_id: &str,
        visibility: GamertagVisibility,
    ) -> Result<bool> {
        if profile_owner_id == viewer_id {
            return Ok(true);
        }

        match visibility {
            GamertagVisibility::Public => Ok(true),
            GamertagVisibility::Friends => self.are_friends(profile_owner_id, viewer_id).await,
        }
    }

    /// Returns the counterpart users across all accepted records involving
    /// the user. Counterparts that no longer resolve are skipped.
    pub async fn get_friends(&self, user_id: &str) -> Result<Vec<User>> {
        self.require_user(user_id).await?;

        let friendships = self.friendships.list_involving(user_id).await?;
        let mut friends = Vec::new();
        for friendship in friendships.iter().filter(|f| f.is_accepted()) {
            let Some(other_id) = friendship.other_user(user_id) else {
                continue;
            };
            if let Some(user) = self.users.find_by_id(other_id).await? {
                friends.push(user);
            }
        }

        tracing::debug!(%user_id, count = friends.len(), "[FriendshipService] Friends listed");
        Ok(friends)
    }

    /// Pending requests where the user is the receiver.
    pub async fn pending_received(&self, user_id: &str) -> Result<Vec<Friendship>> {
        self.require_user(user_id).await?;
        self.friendships
            .list_by_receiver(user_id, FriendshipStatus::Pending)
            .await
    }

    /// Pending requests where the user is the requester.
    pub async fn pending_sent(&self, user_id: &str) -> Result<Vec<Friendship>> {
        self.require_user(user_id).await?;
        self.friendships
            .list_by_requester(user_id, FriendshipStatus::Pending)
            .await
    }

    /// Returns the friendship with the given id, or `NotFound`.
    pub async fn get_by_id(&self, friendship_id: &str) -> Result<Friendship> {
        self.friendships
            .find_by_id(friendship_id)
            .await?
            .ok_or_else(|| CoveError::not_found("friendship", friendship_id))
    }
}
