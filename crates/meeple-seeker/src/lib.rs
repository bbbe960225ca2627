//! Meeple Seeker - query and list-building engine for board game
//! collections.
//!
//! The crate narrows a fixed catalog of games by chained field comparisons
//! written as short text clauses, sorts the result by a chosen field and
//! direction, and maintains a separate saved selection built by index,
//! range, or name references into the last result. It supports:
//!
//! - A filter mini-language: comma-separated `field operator literal`
//!   clauses combined with logical AND
//! - Per-type comparison semantics: case-insensitive text, integers, and
//!   exact-equality reals
//! - Progressive refinement: each filter call narrows the previous result
//! - A selection list addressed by `all`, 1-based indices, inclusive
//!   ranges, or exact names, exportable as newline-separated text
//!
//! # Quick Start
//!
//! ```rust
//! use meeple_seeker::{BoardGame, GameList, Planner};
//!
//! let catalog = vec![
//!     BoardGame::new("Chess", 700, 2, 2, 10, 20, 10.0, 10.0, 2006),
//!     BoardGame::new("Go", 100, 2, 5, 30, 30, 7.5, 8.0, 2000),
//!     BoardGame::new("Monopoly", 800, 6, 10, 20, 1000, 5.0, 1.0, 2007),
//! ];
//!
//! let mut planner = Planner::new(catalog);
//!
//! // Narrow the catalog; results come back sorted by name.
//! let matches = planner.filter("minplayers>=2, maxtime<=30").unwrap();
//! assert_eq!(matches.len(), 2); // Chess, Go
//!
//! // Build a saved list against the filtered snapshot.
//! let mut list = GameList::new();
//! list.add("all", &matches).unwrap();
//! assert_eq!(list.count(), 2);
//! assert_eq!(list.export(), "Chess\nGo\n");
//! ```
//!
//! # Filter Semantics
//!
//! A filter string is split on commas; each piece is one clause. The seven
//! operators are `==`, `!=`, `~=` (substring, text only), `>`, `<`, `>=`,
//! and `<=`. Structurally malformed clauses - no operator, bad split,
//! unknown field - contribute no constraint, so a typo degrades gracefully.
//! Numeric literals are strict: `minplayers>=abc` fails the whole call
//! with [`SeekerError::MalformedLiteral`] and leaves the session's view
//! untouched.
//!
//! | Field kind | Fields | Operators |
//! |------------|--------|-----------|
//! | Text | `name` | all seven, text compared case-insensitively |
//! | Integer | `minplayers`, `maxplayers`, `mintime`, `maxtime`, `rank`, `year` | all but `~=` |
//! | Real | `rating`, `difficulty` | all but `~=`; equality is exact |
//!
//! # Selection Tokens
//!
//! [`GameList::add`] resolves tokens against an ordered snapshot (normally
//! the planner's last output); [`GameList::remove`] resolves them against
//! the selection itself. `all` selects or clears everything; `N` and `N-M`
//! are 1-based with inclusive endpoints; a bare `\w+` token is an exact
//! name. Token errors are strict and surface to the caller - the opposite
//! policy from filter clauses, and deliberately so.

mod clause;
mod error;
mod field;
mod game;
mod list;
mod op;
mod ordering;
mod planner;
mod value;

// Re-export public API
pub use clause::{matches_all, Clause, ClauseValue};
pub use error::{Result, SeekerError};
pub use field::{FieldKind, GameField};
pub use game::BoardGame;
pub use list::GameList;
pub use op::Op;
pub use ordering::{compare_games, Dir};
pub use planner::Planner;
pub use value::{compare_values, Value};
