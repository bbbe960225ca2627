//! Sort direction and the field comparator.

use std::cmp::Ordering;

use crate::field::GameField;
use crate::game::BoardGame;
use crate::value::compare_values;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged. For `Desc`, reverses it.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compares two games on a field, with direction applied.
///
/// Name keys compare case-insensitively. Ties on the sort key break on the
/// case-insensitive name and then the raw name, so result order is
/// deterministic regardless of input order. A NaN key compares as a tie.
pub fn compare_games(field: GameField, dir: Dir, a: &BoardGame, b: &BoardGame) -> Ordering {
    let key = compare_values(&field.value_of(a), &field.value_of(b)).unwrap_or(Ordering::Equal);
    dir.apply(key)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}
