//! The board game entity.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Games are plain immutable records; the engine never mutates one after
/// construction. The name is the game's identity for selection lists
/// (case-sensitive there), while filtering and sorting compare it
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardGame {
    /// Display name, also the selection identity.
    pub name: String,
    /// Position in the catalog's overall ranking.
    pub rank: i64,
    /// Smallest supported player count.
    pub min_players: i64,
    /// Largest supported player count.
    pub max_players: i64,
    /// Shortest listed play time, in minutes.
    pub min_play_time: i64,
    /// Longest listed play time, in minutes.
    pub max_play_time: i64,
    /// Average community rating.
    pub rating: f64,
    /// Complexity weight.
    pub difficulty: f64,
    /// Year of first publication.
    pub year: i64,
}

impl BoardGame {
    /// Creates a game record.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        rank: i64,
        min_players: i64,
        max_players: i64,
        min_play_time: i64,
        max_play_time: i64,
        rating: f64,
        difficulty: f64,
        year: i64,
    ) -> Self {
        BoardGame {
            name: name.into(),
            rank,
            min_players,
            max_players,
            min_play_time,
            max_play_time,
            rating,
            difficulty,
            year,
        }
    }
}
