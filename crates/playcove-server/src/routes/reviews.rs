//! Review handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use playcove_core::review::{NewReview, Review, ReviewUpdate};

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: String,
    pub user_id: String,
    pub game_id: String,
    pub rating: i32,
    pub content: String,
    pub created_at: String,
}

impl From<Review> for ReviewDto {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            user_id: review.user_id,
            game_id: review.game_id,
            rating: review.rating,
            content: review.content,
            created_at: review.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub game_id: String,
    pub rating: i32,
    pub content: String,
}

pub async fn create_review(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ReviewDto>), ApiError> {
    let review = state
        .reviews
        .create_review(NewReview {
            user_id: user.id,
            game_id: request.game_id,
            rating: request.rating,
            content: request.content,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(review.into())))
}

pub async fn get_review(
    State(state): State<AppState>,
    Path(review_id): Path<String>,
) -> Result<Json<ReviewDto>, ApiError> {
    Ok(Json(state.reviews.get_by_id(&review_id).await?.into()))
}

pub async fn reviews_for_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<Vec<ReviewDto>>, ApiError> {
    let reviews = state.reviews.reviews_for_game(&game_id).await?;
    Ok(Json(reviews.into_iter().map(ReviewDto::from).collect()))
}

pub async fn reviews_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<ReviewDto>>, ApiError> {
    let reviews = state.reviews.reviews_by_user(&user_id).await?;
    Ok(Json(reviews.into_iter().map(ReviewDto::from).collect()))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReviewRequest {
    pub rating: Option<i32>,
    pub content: Option<String>,
}

pub async fn update_review(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(review_id): Path<String>,
    Json(request): Json<UpdateReviewRequest>,
) -> Result<Json<ReviewDto>, ApiError> {
    let review = state
        .reviews
        .update_review(
            &review_id,
            &user.id,
            ReviewUpdate {
                rating: request.rating,
                content: request.content,
            },
        )
        .await?;
    Ok(Json(review.into()))
}

pub async fn delete_review(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(review_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.reviews.delete_review(&review_id, &user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
