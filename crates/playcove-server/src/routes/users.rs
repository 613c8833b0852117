//! User and profile handlers.

use std::collections::HashMap;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use playcove_application::ProfileView;
use playcove_core::user::{GamertagVisibility, NewUser, ProfileUpdate, User};

use crate::auth::{CurrentUser, MaybeUser, Verified};
use crate::error::ApiError;
use crate::state::AppState;

/// Full user record, only ever returned to its owner.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub preferred_platforms: Vec<String>,
    pub favorite_game_ids: Vec<String>,
    pub gamertags: HashMap<String, String>,
    pub gamertags_visibility: GamertagVisibility,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            bio: user.bio,
            avatar_url: user.avatar_url,
            preferred_platforms: user.preferred_platforms,
            favorite_game_ids: user.favorite_game_ids,
            gamertags: user.gamertags,
            gamertags_visibility: user.gamertags_visibility,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

pub async fn register(
    State(state): State<AppState>,
    Verified(identity): Verified,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserDto>), ApiError> {
    let user = state
        .users
        .create_user(NewUser {
            subject_id: identity.subject,
            username: request.username,
            email: identity.email,
            bio: request.bio,
            avatar_url: request.avatar_url,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

pub async fn me(CurrentUser(user): CurrentUser) -> Json<UserDto> {
    Json(user.into())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub preferred_platforms: Option<Vec<String>>,
    pub favorite_game_ids: Option<Vec<String>>,
}

pub async fn update_me(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<UserDto>, ApiError> {
    let updated = state
        .users
        .update_profile(
            &user.id,
            ProfileUpdate {
                bio: request.bio,
                avatar_url: request.avatar_url,
                preferred_platforms: request.preferred_platforms,
                favorite_game_ids: request.favorite_game_ids,
            },
        )
        .await?;
    Ok(Json(updated.into()))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityRequest {
    pub visibility: GamertagVisibility,
}

pub async fn update_gamertags_visibility(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<VisibilityRequest>,
) -> Result<Json<UserDto>, ApiError> {
    let updated = state
        .users
        .update_gamertags_visibility(&user.id, request.visibility)
        .await?;
    Ok(Json(updated.into()))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamertagRequest {
    pub gamertag: String,
}

pub async fn put_gamertag(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(platform): Path<String>,
    Json(request): Json<GamertagRequest>,
) -> Result<Json<UserDto>, ApiError> {
    let updated = state
        .users
        .add_gamertag(&user.id, &platform, &request.gamertag)
        .await?;
    Ok(Json(updated.into()))
}

pub async fn delete_gamertag(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(platform): Path<String>,
) -> Result<Json<UserDto>, ApiError> {
    let updated = state.users.remove_gamertag(&user.id, &platform).await?;
    Ok(Json(updated.into()))
}

pub async fn add_favorite_game(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(game_id): Path<String>,
) -> Result<Json<UserDto>, ApiError> {
    let updated = state.users.add_favorite_game(&user.id, &game_id).await?;
    Ok(Json(updated.into()))
}

pub async fn remove_favorite_game(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(game_id): Path<String>,
) -> Result<Json<UserDto>, ApiError> {
    let updated = state.users.remove_favorite_game(&user.id, &game_id).await?;
    Ok(Json(updated.into()))
}

pub async fn favorite_games(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.users.favorite_games(&user_id).await?))
}

pub async fn get_profile(
    State(state): State<AppState>,
    MaybeUser(viewer): MaybeUser,
    Path(user_id): Path<String>,
) -> Result<Json<ProfileView>, ApiError> {
    let view = state
        .profiles
        .view_profile(&user_id, viewer.as_ref().map(|u| u.id.as_str()))
        .await?;
    Ok(Json(view))
}

pub async fn get_profile_by_username(
    State(state): State<AppState>,
    MaybeUser(viewer): MaybeUser,
    Path(username): Path<String>,
) -> Result<Json<ProfileView>, ApiError> {
    let user = state.users.get_by_username(&username).await?;
    let view = state
        .profiles
        .view_profile(&user.id, viewer.as_ref().map(|u| u.id.as_str()))
        .await?;
    Ok(Json(view))
}
