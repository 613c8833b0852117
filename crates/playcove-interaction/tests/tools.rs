//! Tool behavior against the in-memory stores.

use std::sync::Arc;

use serde_json::json;

use playcove_core::game::{Game, GameRepository};
use playcove_core::review::{Review, ReviewRepository};
use playcove_infrastructure::{
    InMemoryGameRepository, InMemoryReviewRepository, InMemoryUserRepository,
};
use playcove_interaction::ToolReply;
use playcove_interaction::tools::{AgentTool, RandomGameTool, RecommendationTool, ReviewLookupTool};

struct Fixture {
    games: Arc<InMemoryGameRepository>,
    reviews: Arc<InMemoryReviewRepository>,
    users: Arc<InMemoryUserRepository>,
}

fn fixture() -> Fixture {
    Fixture {
        games: Arc::new(InMemoryGameRepository::new()),
        reviews: Arc::new(InMemoryReviewRepository::new()),
        users: Arc::new(InMemoryUserRepository::new()),
    }
}

impl Fixture {
    fn review_tool(&self) -> ReviewLookupTool {
        ReviewLookupTool::new(self.games.clone(), self.reviews.clone(), self.users.clone())
    }

    async fn add_game(&self, title: &str) -> Game {
        let game = Game::new(format!("ext-{title}"), title);
        self.games.save(&game).await.unwrap();
        game
    }

    async fn add_review(&self, game: &Game, rating: i32, content: &str) {
        let review = Review::new("reviewer", &game.id, rating, content);
        self.reviews.save(&review).await.unwrap();
    }
}

#[tokio::test]
async fn review_lookup_resolves_typos_and_sorts_by_rating() {
    let fx = fixture();
    let hollow_knight = fx.add_game("Hollow Knight").await;
    fx.add_game("Celeste").await;
    for (rating, content) in [(7, "good"), (10, "masterpiece"), (9, "great"), (8, "solid")] {
        fx.add_review(&hollow_knight, rating, content).await;
    }

    let reply = fx
        .review_tool()
        .execute(&json!({"game_title": "Hollow Knigt"}))
        .await
        .unwrap();

    match reply {
        ToolReply::ReviewList { game, reviews, .. } => {
            assert_eq!(game.title, "Hollow Knight");
            let ratings: Vec<i32> = reviews.iter().map(|r| r.rating).collect();
            assert_eq!(ratings, vec![10, 9, 8]);
        }
        other => panic!("expected a review list, got {other:?}"),
    }
}

#[tokio::test]
async fn review_lookup_redirects_quiz_phrased_requests() {
    let fx = fixture();
    fx.add_game("Hollow Knight").await;

    let reply = fx
        .review_tool()
        .execute(&json!({"game_title": "play a random quiz"}))
        .await
        .unwrap();

    match reply {
        ToolReply::ReplyOnly(text) => assert!(text.contains("quiz")),
        other => panic!("expected a reply-only refusal, got {other:?}"),
    }
}

#[tokio::test]
async fn review_lookup_reports_missing_reviews_explicitly() {
    let fx = fixture();
    fx.add_game("Celeste").await;

    let reply = fx
        .review_tool()
        .execute(&json!({"game_title": "Celeste"}))
        .await
        .unwrap();

    match reply {
        ToolReply::ReplyOnly(text) => assert!(text.contains("No reviews found for Celeste")),
        other => panic!("expected an explicit no-reviews reply, got {other:?}"),
    }
}

#[tokio::test]
async fn review_lookup_uses_fallback_dataset_when_catalog_is_empty() {
    let fx = fixture();

    let reply = fx
        .review_tool()
        .execute(&json!({"game_title": "Hollow Knight"}))
        .await
        .unwrap();

    match reply {
        ToolReply::ReviewList { game, reviews, .. } => {
            assert_eq!(game.title, "Hollow Knight");
            assert!(!reviews.is_empty());
            assert!(reviews.len() <= 3);
        }
        other => panic!("expected a review list from the fallback set, got {other:?}"),
    }
}

#[tokio::test]
async fn recommendations_resolve_known_candidates() {
    let fx = fixture();
    fx.add_game("Hollow Knight").await;
    fx.add_game("Dead Cells").await;
    fx.add_game("Celeste").await;

    let tool = RecommendationTool::new(fx.games.clone());
    let reply = tool
        .execute(&json!({
            "game_title": "Hollow Knight",
            "similar1": "dead cells",
            "similar2": "Celeste",
            "similar3": "Not In Catalog"
        }))
        .await
        .unwrap();

    match reply {
        ToolReply::RecommendationList {
            recommendations, ..
        } => {
            let titles: Vec<&str> = recommendations.iter().map(|r| r.title.as_str()).collect();
            assert_eq!(titles, vec!["Dead Cells", "Celeste"]);
            assert!(recommendations.iter().all(|r| r.id.is_some()));
        }
        other => panic!("expected recommendations, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_primary_title_returns_popular_fallback_not_an_error() {
    let fx = fixture();
    fx.add_game("Celeste").await;

    let tool = RecommendationTool::new(fx.games.clone());
    let reply = tool
        .execute(&json!({"game_title": "Some Game Nobody Heard Of"}))
        .await
        .unwrap();

    match reply {
        ToolReply::RecommendationList {
            reply,
            recommendations,
        } => {
            assert!(reply.contains("popular games"));
            assert_eq!(recommendations.len(), 5);
            assert!(recommendations.iter().all(|r| r.id.is_none()));
        }
        other => panic!("expected the fallback list, got {other:?}"),
    }
}

#[tokio::test]
async fn quiz_starts_with_title_initials_and_full_attempts() {
    let fx = fixture();
    fx.add_game("Hollow Knight").await;
    fx.add_game("Dead Cells").await;

    let tool = RandomGameTool::new(fx.games.clone());
    let reply = tool.execute(&json!({})).await.unwrap();

    match reply {
        ToolReply::QuizStart { game, quiz, reply } => {
            assert!(quiz.active);
            assert_eq!(quiz.hint_number, Some(1));
            assert_eq!(quiz.remaining_attempts, Some(5));

            // Hint #1 is always derived from the title-word initials.
            let initials: String = game
                .title
                .split_whitespace()
                .filter_map(|w| w.chars().next())
                .map(|c| format!("{c}."))
                .collect();
            let hint = quiz.hint.expect("quiz should carry its first hint");
            assert!(hint.contains(&initials));
            assert!(reply.contains("5 attempts"));
        }
        other => panic!("expected a quiz start, got {other:?}"),
    }
}

#[tokio::test]
async fn quiz_falls_back_to_static_catalog_when_store_is_empty() {
    let fx = fixture();
    let tool = RandomGameTool::new(fx.games.clone());

    let reply = tool.execute(&json!({})).await.unwrap();
    match reply {
        ToolReply::QuizStart { quiz, .. } => assert!(quiz.active),
        other => panic!("expected a quiz start from the fallback set, got {other:?}"),
    }
}
