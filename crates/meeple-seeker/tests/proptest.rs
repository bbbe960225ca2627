//! Property-based tests for the planner and the selection list.

use proptest::prelude::*;

use meeple_seeker::{BoardGame, Dir, GameField, GameList, Planner};

// ============================================================================
// Strategies
// ============================================================================

/// Games with distinct-ish names and small numeric ranges so filters hit
/// both matching and non-matching games.
fn game_strategy() -> impl Strategy<Value = BoardGame> {
    (
        "[a-zA-Z][a-z]{1,8}",
        1i64..1000,
        1i64..8,
        1i64..20,
        5i64..120,
        10i64..240,
        0u16..100,
        0u16..50,
        1990i64..2025,
    )
        .prop_map(
            |(name, rank, min_p, max_p, min_t, max_t, rating, difficulty, year)| {
                BoardGame::new(
                    name,
                    rank,
                    min_p,
                    max_p,
                    min_t,
                    max_t,
                    f64::from(rating) / 10.0,
                    f64::from(difficulty) / 10.0,
                    year,
                )
            },
        )
}

fn catalog_strategy() -> impl Strategy<Value = Vec<BoardGame>> {
    prop::collection::vec(game_strategy(), 0..40)
}

// ============================================================================
// Filtering properties
// ============================================================================

proptest! {
    /// Filtering never grows the view and every match satisfies the clause.
    #[test]
    fn filter_is_sound(games in catalog_strategy(), threshold in 1i64..8) {
        let mut planner = Planner::new(games);
        let before = planner.view().len();

        let results = planner.filter(&format!("minplayers>={threshold}")).unwrap();

        prop_assert!(results.len() <= before);
        for game in &results {
            prop_assert!(game.min_players >= threshold);
        }
    }

    /// No game satisfying the clause is excluded from the result.
    #[test]
    fn filter_is_complete(games in catalog_strategy(), threshold in 1990i64..2025) {
        let mut planner = Planner::new(games);
        let catalog = planner.catalog().to_vec();

        let results = planner.filter(&format!("year<{threshold}")).unwrap();

        for game in catalog {
            if game.year < threshold {
                prop_assert!(results.contains(&game));
            }
        }
    }

    /// Chained calls narrow exactly like one combined filter string.
    #[test]
    fn chaining_equals_combining(
        games in catalog_strategy(),
        players in 1i64..8,
        time in 10i64..240,
    ) {
        let mut chained = Planner::new(games.clone());
        chained.filter(&format!("minplayers>={players}")).unwrap();
        let chained_result = chained.filter(&format!("maxtime<={time}")).unwrap();

        let mut combined = Planner::new(games);
        let combined_result = combined
            .filter(&format!("minplayers>={players},maxtime<={time}"))
            .unwrap();

        prop_assert_eq!(chained_result, combined_result);
    }

    /// An empty filter matches everything still in the view.
    #[test]
    fn empty_filter_preserves_view(games in catalog_strategy()) {
        let mut planner = Planner::new(games);
        let expected = planner.view().len();
        let results = planner.filter("").unwrap();
        prop_assert_eq!(results.len(), expected);
    }

    /// Reset always restores the full catalog.
    #[test]
    fn reset_restores_catalog(games in catalog_strategy(), threshold in 1i64..8) {
        let mut planner = Planner::new(games);
        let full = planner.catalog().len();

        planner.filter(&format!("maxplayers>={threshold}")).unwrap();
        planner.reset();

        prop_assert_eq!(planner.view().len(), full);
    }

    /// Equality against a game's own field value always matches (reflexivity).
    #[test]
    fn equality_is_reflexive(games in prop::collection::vec(game_strategy(), 1..20)) {
        let game = games[0].clone();
        let mut planner = Planner::new(games);

        let results = planner.filter(&format!("year=={}", game.year)).unwrap();
        prop_assert!(results.iter().any(|g| g.year == game.year));
    }

    /// Default output is sorted by name, case-insensitively.
    #[test]
    fn default_output_is_name_sorted(games in catalog_strategy()) {
        let mut planner = Planner::new(games);
        let results = planner.filter("").unwrap();

        for pair in results.windows(2) {
            prop_assert!(pair[0].name.to_lowercase() <= pair[1].name.to_lowercase());
        }
    }

    /// Explicit sorts order by the requested key in the requested direction.
    #[test]
    fn explicit_sort_orders_by_key(games in catalog_strategy()) {
        let mut planner = Planner::new(games);
        let results = planner.filter_sorted("", GameField::Rank, Dir::Desc).unwrap();

        for pair in results.windows(2) {
            prop_assert!(pair[0].rank >= pair[1].rank);
        }
    }
}

// ============================================================================
// Selection list properties
// ============================================================================

proptest! {
    /// `add("all")` selects every distinct name; `remove("all")` clears.
    #[test]
    fn add_all_remove_all_round_trip(games in catalog_strategy()) {
        let mut distinct: Vec<&str> = games.iter().map(|g| g.name.as_str()).collect();
        distinct.sort();
        distinct.dedup();

        let mut list = GameList::new();
        list.add("all", &games).unwrap();
        prop_assert_eq!(list.count(), distinct.len());

        list.remove("all").unwrap();
        prop_assert_eq!(list.count(), 0);
    }

    /// Adding the same index twice leaves one entry (idempotence).
    #[test]
    fn add_is_idempotent(games in prop::collection::vec(game_strategy(), 1..20)) {
        let mut list = GameList::new();
        list.add("1", &games).unwrap();
        let after_one = list.count();
        list.add("1", &games).unwrap();
        prop_assert_eq!(list.count(), after_one);
    }

    /// Every in-bounds range adds exactly its span of distinct names.
    #[test]
    fn range_add_covers_span(
        games in prop::collection::vec(game_strategy(), 1..20),
        bounds in (1usize..20, 1usize..20),
    ) {
        let (a, b) = bounds;
        let (start, end) = (a.min(b), a.max(b));
        prop_assume!(end <= games.len());

        let mut list = GameList::new();
        list.add(&format!("{start}-{end}"), &games).unwrap();

        for game in &games[start - 1..end] {
            prop_assert!(list.contains(&game.name));
        }
    }

    /// Export always ends each member with a newline and contains count lines.
    #[test]
    fn export_line_count_matches(games in catalog_strategy()) {
        let mut list = GameList::new();
        list.add("all", &games).unwrap();

        let blob = list.export();
        prop_assert_eq!(blob.lines().count(), list.count());
        if !blob.is_empty() {
            prop_assert!(blob.ends_with('\n'));
        }
    }

    /// Removing a selected name by token always shrinks the list by one.
    #[test]
    fn remove_by_name_shrinks(games in prop::collection::vec(game_strategy(), 1..20)) {
        let mut list = GameList::new();
        list.add("all", &games).unwrap();

        let name = list.sorted_names()[0].clone();
        // "all" is a reserved token, not a name lookup.
        prop_assume!(name != "all");
        let before = list.count();
        list.remove(&name).unwrap();

        prop_assert_eq!(list.count(), before - 1);
        prop_assert!(!list.contains(&name));
    }
}
