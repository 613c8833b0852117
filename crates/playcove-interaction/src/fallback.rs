//! Static fallback dataset.
//!
//! Used when the catalog is empty (fresh deployments, tests) so the
//! assistant tools still have something to answer with. Ids are fixed
//! strings so the fallback reviews can reference the fallback games.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use playcove_core::game::Game;
use playcove_core::review::Review;

/// Well-known titles offered when a recommendation lookup cannot resolve
/// the primary game.
pub const POPULAR_TITLES: [&str; 5] = [
    "The Legend of Zelda: Breath of the Wild",
    "The Witcher 3: Wild Hunt",
    "Red Dead Redemption 2",
    "God of War (2018)",
    "Elden Ring",
];

#[allow(clippy::too_many_arguments)]
fn game(
    id: &str,
    external_id: &str,
    title: &str,
    description: &str,
    cover_url: &str,
    release_date: Option<NaiveDate>,
    platforms: &[&str],
    genres: &[&str],
) -> Game {
    Game {
        id: id.to_string(),
        external_id: external_id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        cover_url: cover_url.to_string(),
        release_date,
        platforms: platforms.iter().map(|p| p.to_string()).collect(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
    }
}

fn review(game_id: &str, rating: i32, content: &str) -> Review {
    Review::new("fallback-user", game_id, rating, content)
}

static GAMES: Lazy<Vec<Game>> = Lazy::new(|| {
    vec![
        game(
            "fallback-1",
            "API-001",
            "Hollow Knight",
            "A challenging 2D action-adventure through a vast, ruined kingdom of insects.",
            "https://images.igdb.com/igdb/image/upload/t_cover_big/co1r9j.jpg",
            NaiveDate::from_ymd_opt(2017, 2, 24),
            &["PC", "Switch", "PS4", "Xbox"],
            &["Metroidvania", "Action", "Platformer"],
        ),
        game(
            "fallback-2",
            "API-002",
            "Celeste",
            "A platforming masterpiece about climbing a mountain and overcoming anxiety.",
            "https://images.igdb.com/igdb/image/upload/t_cover_big/co2t4g.jpg",
            NaiveDate::from_ymd_opt(2018, 1, 25),
            &["PC", "Switch", "PS4", "Xbox"],
            &["Platformer", "Indie", "Adventure"],
        ),
        game(
            "fallback-3",
            "API-003",
            "Ori and the Blind Forest",
            "An emotional journey through a beautiful forest filled with secrets and challenges.",
            "https://images.igdb.com/igdb/image/upload/t_cover_big/co1qv7.jpg",
            NaiveDate::from_ymd_opt(2015, 3, 11),
            &["PC", "Switch", "Xbox"],
            &["Adventure", "Platformer", "Metroidvania"],
        ),
        game(
            "fallback-4",
            "API-004",
            "Dead Cells",
            "A roguelike, Metroidvania-inspired action-platformer where you explore an ever-changing castle.",
            "https://images.igdb.com/igdb/image/upload/t_cover_big/co2ox1.jpg",
            NaiveDate::from_ymd_opt(2018, 8, 7),
            &["PC", "Switch", "PS4", "Xbox"],
            &["Roguelike", "Action", "Platformer"],
        ),
    ]
});

static REVIEWS: Lazy<Vec<Review>> = Lazy::new(|| {
    vec![
        review(
            "fallback-1",
            10,
            "An absolute masterpiece - haunting atmosphere and rewarding gameplay.",
        ),
        review("fallback-1", 9, "Stunning art direction and deep lore. A must-play."),
        review(
            "fallback-2",
            8,
            "Celeste is emotional and challenging - tight controls and a moving story.",
        ),
        review(
            "fallback-3",
            9,
            "Ori offers one of the most heartfelt adventures in gaming.",
        ),
        review(
            "fallback-4",
            7,
            "Dead Cells brings fast-paced roguelike action with great replayability.",
        ),
    ]
});

/// The fallback catalog.
pub fn fallback_games() -> &'static [Game] {
    &GAMES
}

/// Reviews for the fallback catalog, keyed by the fixed fallback game ids.
pub fn fallback_reviews_for(game_id: &str) -> Vec<Review> {
    REVIEWS
        .iter()
        .filter(|r| r.game_id == game_id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_catalog_is_nonempty_and_reviewed() {
        let games = fallback_games();
        assert!(games.len() >= 2);

        let first = &games[0];
        let reviews = fallback_reviews_for(&first.id);
        assert!(!reviews.is_empty());
        assert!(reviews.iter().all(|r| r.game_id == first.id));
    }
}
