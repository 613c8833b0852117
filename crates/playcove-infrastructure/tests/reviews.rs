//! Review service behavior against the in-memory stores.

use std::sync::Arc;

use playcove_core::game::{GameService, GameUpsert};
use playcove_core::review::{NewReview, ReviewService, ReviewUpdate};
use playcove_core::user::{NewUser, UserService};
use playcove_infrastructure::{
    InMemoryGameRepository, InMemoryReviewRepository, InMemoryUserRepository,
};

struct Fixture {
    users: UserService,
    games: GameService,
    reviews: ReviewService,
    review_repo: Arc<InMemoryReviewRepository>,
}

fn fixture() -> Fixture {
    let user_repo = Arc::new(InMemoryUserRepository::new());
    let game_repo = Arc::new(InMemoryGameRepository::new());
    let review_repo = Arc::new(InMemoryReviewRepository::new());
    Fixture {
        users: UserService::new(user_repo.clone()),
        games: GameService::new(game_repo.clone()),
        reviews: ReviewService::new(review_repo.clone(), user_repo, game_repo),
        review_repo,
    }
}

async fn make_user(fx: &Fixture, username: &str) -> String {
    fx.users
        .create_user(NewUser {
            subject_id: format!("sub-{username}"),
            username: username.to_string(),
            email: None,
            bio: None,
            avatar_url: None,
        })
        .await
        .unwrap()
        .id
}

async fn make_game(fx: &Fixture, external_id: &str, title: &str) -> String {
    fx.games
        .upsert(GameUpsert {
            external_id: external_id.to_string(),
            title: title.to_string(),
            description: String::new(),
            cover_url: String::new(),
            release_date: None,
            platforms: vec![],
            genres: vec![],
        })
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn create_review_validates_rating_and_references() {
    let fx = fixture();
    let user = make_user(&fx, "alice").await;
    let game = make_game(&fx, "ext-1", "Celeste").await;

    let err = fx
        .reviews
        .create_review(NewReview {
            user_id: user.clone(),
            game_id: game.clone(),
            rating: 11,
            content: "too high".to_string(),
        })
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());

    let err = fx
        .reviews
        .create_review(NewReview {
            user_id: "missing".to_string(),
            game_id: game.clone(),
            rating: 8,
            content: "ghost author".to_string(),
        })
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let review = fx
        .reviews
        .create_review(NewReview {
            user_id: user,
            game_id: game,
            rating: 8,
            content: "solid".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(review.rating, 8);
}

#[tokio::test]
async fn only_the_author_can_update_or_delete() {
    let fx = fixture();
    let author = make_user(&fx, "author").await;
    let other = make_user(&fx, "other").await;
    let game = make_game(&fx, "ext-1", "Celeste").await;

    let review = fx
        .reviews
        .create_review(NewReview {
            user_id: author.clone(),
            game_id: game,
            rating: 7,
            content: "good".to_string(),
        })
        .await
        .unwrap();

    let err = fx
        .reviews
        .update_review(
            &review.id,
            &other,
            ReviewUpdate {
                rating: Some(1),
                content: None,
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_forbidden());

    let err = fx.reviews.delete_review(&review.id, &other).await.unwrap_err();
    assert!(err.is_forbidden());

    let updated = fx
        .reviews
        .update_review(
            &review.id,
            &author,
            ReviewUpdate {
                rating: Some(9),
                content: Some("even better on replay".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.rating, 9);

    fx.reviews.delete_review(&review.id, &author).await.unwrap();
    assert!(fx.reviews.get_by_id(&review.id).await.is_err());
}

#[tokio::test]
async fn average_rating_rounds_to_one_decimal() {
    let fx = fixture();
    let user = make_user(&fx, "alice").await;
    let game = make_game(&fx, "ext-1", "Celeste").await;

    assert_eq!(fx.reviews.average_rating(&game).await.unwrap(), 0.0);

    for rating in [10, 9, 8] {
        fx.reviews
            .create_review(NewReview {
                user_id: user.clone(),
                game_id: game.clone(),
                rating,
                content: format!("rated {rating}"),
            })
            .await
            .unwrap();
    }

    // (10 + 9 + 8) / 3 = 9.0
    assert_eq!(fx.reviews.average_rating(&game).await.unwrap(), 9.0);

    fx.reviews
        .create_review(NewReview {
            user_id: user,
            game_id: game.clone(),
            rating: 8,
            content: "another".to_string(),
        })
        .await
        .unwrap();

    // 35 / 4 = 8.75 -> 8.8
    assert_eq!(fx.reviews.average_rating(&game).await.unwrap(), 8.8);
}

#[tokio::test]
async fn top_rated_returns_at_most_three_sorted_descending() {
    let fx = fixture();
    let user = make_user(&fx, "alice").await;
    let game = make_game(&fx, "ext-1", "Celeste").await;

    for rating in [6, 9, 7, 10, 8] {
        fx.reviews
            .create_review(NewReview {
                user_id: user.clone(),
                game_id: game.clone(),
                rating,
                content: format!("rated {rating}"),
            })
            .await
            .unwrap();
    }

    use playcove_core::review::ReviewRepository;
    let top = fx.review_repo.top_rated_for_game(&game, 3).await.unwrap();
    let ratings: Vec<i32> = top.iter().map(|r| r.rating).collect();
    assert_eq!(ratings, vec![10, 9, 8]);
}
