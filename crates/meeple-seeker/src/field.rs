//! Field registry: tokens, declared kinds, and value access.
//!
//! [`GameField`] is the closed set of filterable and sortable game
//! attributes. Each field declares a [`FieldKind`], which selects the
//! comparison rules applied to its values, and knows how to extract its
//! value from a [`BoardGame`].

use std::str::FromStr;

use crate::error::SeekerError;
use crate::game::BoardGame;
use crate::value::Value;

/// The declared type of a field's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Compared case-insensitively; supports substring matching.
    Text,
    /// Whole-number comparison.
    Integer,
    /// Floating-point comparison, exact equality.
    Real,
}

/// A filterable and sortable game attribute.
///
/// Tokens resolve case-insensitively via [`FromStr`]:
///
/// ```
/// use meeple_seeker::GameField;
///
/// assert_eq!("MinPlayers".parse::<GameField>().unwrap(), GameField::MinPlayers);
/// assert!("bogus".parse::<GameField>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameField {
    /// Game name.
    Name,
    /// Smallest supported player count.
    MinPlayers,
    /// Largest supported player count.
    MaxPlayers,
    /// Shortest listed play time.
    MinTime,
    /// Longest listed play time.
    MaxTime,
    /// Catalog ranking.
    Rank,
    /// Average community rating.
    Rating,
    /// Complexity weight.
    Difficulty,
    /// Year of first publication.
    Year,
}

impl GameField {
    /// All fields, in canonical declaration order.
    pub const ALL: [GameField; 9] = [
        GameField::Name,
        GameField::MinPlayers,
        GameField::MaxPlayers,
        GameField::MinTime,
        GameField::MaxTime,
        GameField::Rank,
        GameField::Rating,
        GameField::Difficulty,
        GameField::Year,
    ];

    /// Canonical token for this field in filter clauses.
    pub fn as_str(self) -> &'static str {
        match self {
            GameField::Name => "name",
            GameField::MinPlayers => "minplayers",
            GameField::MaxPlayers => "maxplayers",
            GameField::MinTime => "mintime",
            GameField::MaxTime => "maxtime",
            GameField::Rank => "rank",
            GameField::Rating => "rating",
            GameField::Difficulty => "difficulty",
            GameField::Year => "year",
        }
    }

    /// The declared kind, which selects the comparison rules.
    pub fn kind(self) -> FieldKind {
        match self {
            GameField::Name => FieldKind::Text,
            GameField::Rating | GameField::Difficulty => FieldKind::Real,
            GameField::MinPlayers
            | GameField::MaxPlayers
            | GameField::MinTime
            | GameField::MaxTime
            | GameField::Rank
            | GameField::Year => FieldKind::Integer,
        }
    }

    /// Extracts this field's value from a game.
    pub fn value_of(self, game: &BoardGame) -> Value<'_> {
        match self {
            GameField::Name => Value::Text(&game.name),
            GameField::MinPlayers => Value::Int(game.min_players),
            GameField::MaxPlayers => Value::Int(game.max_players),
            GameField::MinTime => Value::Int(game.min_play_time),
            GameField::MaxTime => Value::Int(game.max_play_time),
            GameField::Rank => Value::Int(game.rank),
            GameField::Rating => Value::Real(game.rating),
            GameField::Difficulty => Value::Real(game.difficulty),
            GameField::Year => Value::Int(game.year),
        }
    }
}

impl FromStr for GameField {
    type Err = SeekerError;

    /// Case-insensitive exact match on the canonical tokens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.to_lowercase();
        GameField::ALL
            .into_iter()
            .find(|field| field.as_str() == token)
            .ok_or_else(|| SeekerError::UnknownField(s.to_string()))
    }
}

impl std::fmt::Display for GameField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
