//! Game catalog handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use playcove_core::game::{Game, GameUpsert};

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    pub id: String,
    pub external_id: String,
    pub title: String,
    pub description: String,
    pub cover_image_url: String,
    pub release_date: Option<String>,
    pub platforms: Vec<String>,
    pub genres: Vec<String>,
}

impl From<Game> for GameDto {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            external_id: game.external_id,
            title: game.title,
            description: game.description,
            cover_image_url: game.cover_url,
            release_date: game.release_date.map(|d| d.to_string()),
            platforms: game.platforms,
            genres: game.genres,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameUpsertRequest {
    pub external_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover_image_url: String,
    /// `YYYY-MM-DD`
    pub release_date: Option<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
}

pub async fn list_games(State(state): State<AppState>) -> Result<Json<Vec<GameDto>>, ApiError> {
    let games = state.games.list_all().await?;
    Ok(Json(games.into_iter().map(GameDto::from).collect()))
}

pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<GameDto>, ApiError> {
    Ok(Json(state.games.get_by_id(&game_id).await?.into()))
}

pub async fn create_game(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Json(request): Json<GameUpsertRequest>,
) -> Result<(StatusCode, Json<GameDto>), ApiError> {
    let release_date = match request.release_date.as_deref() {
        Some(raw) => Some(
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| ApiError::bad_request("releaseDate must be YYYY-MM-DD"))?,
        ),
        None => None,
    };

    let game = state
        .games
        .upsert(GameUpsert {
            external_id: request.external_id,
            title: request.title,
            description: request.description,
            cover_url: request.cover_image_url,
            release_date,
            platforms: request.platforms,
            genres: request.genres,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(game.into())))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingDto {
    pub game_id: String,
    pub average_rating: f64,
}

pub async fn average_rating(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<RatingDto>, ApiError> {
    // Resolve first so an unknown game is a 404, not a 0.0 average.
    state.games.get_by_id(&game_id).await?;
    let average = state.reviews.average_rating(&game_id).await?;
    Ok(Json(RatingDto {
        game_id,
        average_rating: average,
    }))
}
