//! HTTP routing.

pub mod chat;
pub mod friendships;
pub mod games;
pub mod reviews;
pub mod users;

use axum::routing::{delete, get, patch, post, put};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // users & profiles
        .route("/api/users", post(users::register))
        .route("/api/users/me", get(users::me).put(users::update_me))
        .route(
            "/api/users/me/gamertags-visibility",
            patch(users::update_gamertags_visibility),
        )
        .route(
            "/api/users/me/gamertags/{platform}",
            put(users::put_gamertag).delete(users::delete_gamertag),
        )
        .route(
            "/api/users/me/favorite-games/{game_id}",
            put(users::add_favorite_game).delete(users::remove_favorite_game),
        )
        .route("/api/users/{user_id}", get(users::get_profile))
        .route(
            "/api/users/username/{username}",
            get(users::get_profile_by_username),
        )
        .route(
            "/api/users/{user_id}/favorite-games",
            get(users::favorite_games),
        )
        .route("/api/users/{user_id}/reviews", get(reviews::reviews_by_user))
        // games
        .route("/api/games", get(games::list_games).post(games::create_game))
        .route("/api/games/{game_id}", get(games::get_game))
        .route("/api/games/{game_id}/reviews", get(reviews::reviews_for_game))
        .route("/api/games/{game_id}/rating", get(games::average_rating))
        // reviews
        .route("/api/reviews", post(reviews::create_review))
        .route(
            "/api/reviews/{review_id}",
            get(reviews::get_review)
                .put(reviews::update_review)
                .delete(reviews::delete_review),
        )
        // friendships
        .route("/api/friendships", post(friendships::send_request))
        .route(
            "/api/friendships/{friendship_id}/accept",
            patch(friendships::accept_request),
        )
        .route(
            "/api/friendships/{friendship_id}/decline",
            patch(friendships::decline_request),
        )
        .route(
            "/api/friendships/{friendship_id}",
            delete(friendships::remove_friendship),
        )
        .route("/api/friendships/friends", get(friendships::list_friends))
        .route(
            "/api/friendships/requests/received",
            get(friendships::pending_received),
        )
        .route(
            "/api/friendships/requests/sent",
            get(friendships::pending_sent),
        )
        // assistant
        .route("/api/chat", post(chat::chat))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"ok": true, "service": "playcove-server"}))
}
