//! Sample data for local development.
//!
//! Seeds a handful of users, games, reviews, and friendships so the API and
//! the assistant have something to work with before a real catalog import.

use chrono::NaiveDate;

use playcove_core::error::Result;
use playcove_core::friendship::FriendshipService;
use playcove_core::game::{GameService, GameUpsert};
use playcove_core::review::{NewReview, ReviewService};
use playcove_core::user::{GamertagVisibility, NewUser, UserService};

pub struct SeedServices<'a> {
    pub users: &'a UserService,
    pub games: &'a GameService,
    pub reviews: &'a ReviewService,
    pub friendships: &'a FriendshipService,
}

/// Loads the sample dataset. Intended for a fresh store; seeding twice will
/// fail on the duplicate usernames.
pub async fn seed_sample_data(services: SeedServices<'_>) -> Result<()> {
    tracing::info!("Seeding sample data");

    let ada = services
        .users
        .create_user(NewUser {
            subject_id: "seed-sub-ada".to_string(),
            username: "ada".to_string(),
            email: Some("ada@example.com".to_string()),
            bio: Some("Metroidvania completionist.".to_string()),
            avatar_url: None,
        })
        .await?;
    let noel = services
        .users
        .create_user(NewUser {
            subject_id: "seed-sub-noel".to_string(),
            username: "noel".to_string(),
            email: Some("noel@example.com".to_string()),
            bio: Some("Plays everything once.".to_string()),
            avatar_url: None,
        })
        .await?;

    services.users.add_gamertag(&ada.id, "steam", "ada_hk").await?;
    services
        .users
        .update_gamertags_visibility(&ada.id, GamertagVisibility::Public)
        .await?;
    services.users.add_gamertag(&noel.id, "switch", "noel-plays").await?;

    let hollow_knight = services
        .games
        .upsert(GameUpsert {
            external_id: "seed-001".to_string(),
            title: "Hollow Knight".to_string(),
            description: "A challenging 2D action-adventure through a vast, ruined kingdom of insects."
                .to_string(),
            cover_url: "https://images.igdb.com/igdb/image/upload/t_cover_big/co1r9j.jpg"
                .to_string(),
            release_date: NaiveDate::from_ymd_opt(2017, 2, 24),
            platforms: vec!["PC".into(), "Switch".into(), "PS4".into(), "Xbox".into()],
            genres: vec!["Metroidvania".into(), "Action".into(), "Platformer".into()],
        })
        .await?;
    let celeste = services
        .games
        .upsert(GameUpsert {
            external_id: "seed-002".to_string(),
            title: "Celeste".to_string(),
            description: "A platforming masterpiece about climbing a mountain and overcoming anxiety."
                .to_string(),
            cover_url: "https://images.igdb.com/igdb/image/upload/t_cover_big/co2t4g.jpg"
                .to_string(),
            release_date: NaiveDate::from_ymd_opt(2018, 1, 25),
            platforms: vec!["PC".into(), "Switch".into(), "PS4".into(), "Xbox".into()],
            genres: vec!["Platformer".into(), "Indie".into(), "Adventure".into()],
        })
        .await?;

    services
        .reviews
        .create_review(NewReview {
            user_id: ada.id.clone(),
            game_id: hollow_knight.id.clone(),
            rating: 10,
            content: "An absolute masterpiece - haunting atmosphere and rewarding gameplay."
                .to_string(),
        })
        .await?;
    services
        .reviews
        .create_review(NewReview {
            user_id: noel.id.clone(),
            game_id: hollow_knight.id.clone(),
            rating: 9,
            content: "Stunning art direction and deep lore. A must-play.".to_string(),
        })
        .await?;
    services
        .reviews
        .create_review(NewReview {
            user_id: noel.id.clone(),
            game_id: celeste.id.clone(),
            rating: 8,
            content: "Emotional and challenging - tight controls and a moving story.".to_string(),
        })
        .await?;

    let request = services
        .friendships
        .send_friend_request(&ada.id, &noel.id)
        .await?;
    services
        .friendships
        .accept_friend_request(&request.id, &noel.id)
        .await?;

    tracing::info!("Sample data seeded");
    Ok(())
}
