//! Approximate title resolution shared by every tool.
//!
//! Resolution ladder: exact match, then case-insensitive, then
//! case-insensitive substring, then minimum Levenshtein distance over the
//! whole catalog. Ties on distance break to the first minimal match in
//! catalog iteration order.

use playcove_core::game::Game;

/// Resolves a free-text title against the catalog.
///
/// Returns `None` only for an empty query or an empty catalog; once the
/// ladder reaches the edit-distance stage some game always wins.
pub fn resolve_by_title<'a>(games: &'a [Game], query: &str) -> Option<&'a Game> {
    let query = query.trim();
    if query.is_empty() || games.is_empty() {
        return None;
    }

    if let Some(game) = games.iter().find(|g| g.title == query) {
        return Some(game);
    }

    let query_lower = query.to_lowercase();
    if let Some(game) = games
        .iter()
        .find(|g| g.title.to_lowercase() == query_lower)
    {
        return Some(game);
    }

    if let Some(game) = games
        .iter()
        .find(|g| g.title.to_lowercase().contains(&query_lower))
    {
        return Some(game);
    }

    games
        .iter()
        .min_by_key(|g| strsim::levenshtein(&g.title.to_lowercase(), &query_lower))
}

/// Case-insensitive exact lookup, used where fuzzy completion would be
/// wrong (candidate titles supplied by the model).
pub fn find_exact_ignore_case<'a>(games: &'a [Game], title: &str) -> Option<&'a Game> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    games
        .iter()
        .find(|g| g.title.eq_ignore_ascii_case(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Game> {
        ["Celeste", "Dead Cells", "Hollow Knight", "Ori and the Blind Forest"]
            .iter()
            .enumerate()
            .map(|(i, title)| {
                let mut game = Game::new(format!("ext-{i}"), *title);
                game.description = format!("{title} description");
                game
            })
            .collect()
    }

    #[test]
    fn exact_match_wins() {
        let games = catalog();
        let game = resolve_by_title(&games, "Celeste").expect("should resolve");
        assert_eq!(game.title, "Celeste");
    }

    #[test]
    fn case_insensitive_match() {
        let games = catalog();
        let game = resolve_by_title(&games, "hollow knight").expect("should resolve");
        assert_eq!(game.title, "Hollow Knight");
    }

    #[test]
    fn substring_match() {
        let games = catalog();
        let game = resolve_by_title(&games, "blind forest").expect("should resolve");
        assert_eq!(game.title, "Ori and the Blind Forest");
    }

    #[test]
    fn typo_resolves_by_edit_distance() {
        let games = catalog();
        let game = resolve_by_title(&games, "Hollow Knigt").expect("should resolve");
        assert_eq!(game.title, "Hollow Knight");
    }

    #[test]
    fn distance_ties_break_to_catalog_order() {
        let games = vec![Game::new("a", "Aaa"), Game::new("b", "Aab")];
        // "Aac" is distance 1 from both; the first catalog entry wins.
        let game = resolve_by_title(&games, "Aac").expect("should resolve");
        assert_eq!(game.title, "Aaa");
    }

    #[test]
    fn empty_inputs_resolve_to_nothing() {
        let games = catalog();
        assert!(resolve_by_title(&games, "   ").is_none());
        assert!(resolve_by_title(&[], "Celeste").is_none());
    }

    #[test]
    fn exact_ignore_case_rejects_near_misses() {
        let games = catalog();
        assert!(find_exact_ignore_case(&games, "dead cells").is_some());
        assert!(find_exact_ignore_case(&games, "dead cell").is_none());
    }
}
