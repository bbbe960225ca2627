//! The stateful query session.

use crate::clause::{matches_all, Clause};
use crate::error::Result;
use crate::field::GameField;
use crate::game::BoardGame;
use crate::ordering::{compare_games, Dir};

/// A query session over a fixed catalog of games.
///
/// The planner owns the full catalog and a working view. Every successful
/// [`filter`](Planner::filter) call narrows the view in place, so
/// successive calls refine the previous result rather than re-querying the
/// catalog; [`reset`](Planner::reset) restores the full catalog. The view
/// is always a subset of the catalog.
///
/// ```
/// use meeple_seeker::{BoardGame, Planner};
///
/// let mut planner = Planner::new(vec![
///     BoardGame::new("Chess", 700, 2, 2, 10, 20, 10.0, 10.0, 2006),
///     BoardGame::new("Tucano", 500, 10, 20, 60, 90, 8.0, 6.0, 2004),
/// ]);
///
/// let matches = planner.filter("minplayers<=2").unwrap();
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].name, "Chess");
///
/// // The next filter narrows the already-filtered view.
/// let matches = planner.filter("year==2004").unwrap();
/// assert!(matches.is_empty());
///
/// planner.reset();
/// assert_eq!(planner.filter("").unwrap().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Planner {
    catalog: Vec<BoardGame>,
    view: Vec<BoardGame>,
}

impl Planner {
    /// Creates a session over a catalog.
    ///
    /// The catalog is a set: duplicate records (full value equality) are
    /// dropped.
    pub fn new(catalog: Vec<BoardGame>) -> Self {
        let mut unique: Vec<BoardGame> = Vec::with_capacity(catalog.len());
        for game in catalog {
            if !unique.contains(&game) {
                unique.push(game);
            }
        }
        Planner {
            view: unique.clone(),
            catalog: unique,
        }
    }

    /// Narrows the view by a filter string and returns the matches sorted
    /// by name ascending.
    ///
    /// A [`MalformedLiteral`](crate::SeekerError::MalformedLiteral) failure
    /// leaves the view unchanged: clauses compile before anything is
    /// evaluated.
    pub fn filter(&mut self, filter: &str) -> Result<Vec<BoardGame>> {
        self.filter_sorted(filter, GameField::Name, Dir::Asc)
    }

    /// Narrows the view and returns the matches sorted on `field` in `dir`.
    pub fn filter_sorted(
        &mut self,
        filter: &str,
        field: GameField,
        dir: Dir,
    ) -> Result<Vec<BoardGame>> {
        let clauses = Clause::compile(filter)?;
        self.view.retain(|game| matches_all(&clauses, game));

        let mut results = self.view.clone();
        results.sort_by(|a, b| compare_games(field, dir, a, b));
        Ok(results)
    }

    /// Restores the view to the full catalog.
    pub fn reset(&mut self) {
        self.view = self.catalog.clone();
    }

    /// The full catalog, deduplicated at construction.
    pub fn catalog(&self) -> &[BoardGame] {
        &self.catalog
    }

    /// The current working view (unsorted).
    pub fn view(&self) -> &[BoardGame] {
        &self.view
    }
}
