//! Friendship handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use playcove_core::friendship::{Friendship, FriendshipStatus};
use playcove_core::user::User;

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendshipDto {
    pub id: String,
    pub requester_id: String,
    pub receiver_id: String,
    pub status: FriendshipStatus,
    pub created_at: String,
}

impl From<Friendship> for FriendshipDto {
    fn from(friendship: Friendship) -> Self {
        Self {
            id: friendship.id,
            requester_id: friendship.requester_id,
            receiver_id: friendship.receiver_id,
            status: friendship.status,
            created_at: friendship.created_at.to_rfc3339(),
        }
    }
}

/// Compact user summary for friend lists.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendDto {
    pub id: String,
    pub username: String,
    pub avatar_url: Option<String>,
}

impl From<User> for FriendDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            avatar_url: user.avatar_url,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendRequestBody {
    pub receiver_id: String,
}

pub async fn send_request(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<SendRequestBody>,
) -> Result<(StatusCode, Json<FriendshipDto>), ApiError> {
    let friendship = state
        .friendships
        .send_friend_request(&user.id, &request.receiver_id)
        .await?;
    Ok((StatusCode::CREATED, Json(friendship.into())))
}

pub async fn accept_request(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(friendship_id): Path<String>,
) -> Result<Json<FriendshipDto>, ApiError> {
    let friendship = state
        .friendships
        .accept_friend_request(&friendship_id, &user.id)
        .await?;
    Ok(Json(friendship.into()))
}

pub async fn decline_request(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(friendship_id): Path<String>,
) -> Result<Json<FriendshipDto>, ApiError> {
    let friendship = state
        .friendships
        .decline_friend_request(&friendship_id, &user.id)
        .await?;
    Ok(Json(friendship.into()))
}

pub async fn remove_friendship(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(friendship_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .friendships
        .remove_friendship(&friendship_id, &user.id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_friends(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<FriendDto>>, ApiError> {
    let friends = state.friendships.get_friends(&user.id).await?;
    Ok(Json(friends.into_iter().map(FriendDto::from).collect()))
}

pub async fn pending_received(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<FriendshipDto>>, ApiError> {
    let requests = state.friendships.pending_received(&user.id).await?;
    Ok(Json(requests.into_iter().map(FriendshipDto::from).collect()))
}

pub async fn pending_sent(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<FriendshipDto>>, ApiError> {
    let requests = state.friendships.pending_sent(&user.id).await?;
    Ok(Json(requests.into_iter().map(FriendshipDto::from).collect()))
}
