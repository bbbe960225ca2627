//! The selection set of game names.
//!
//! A [`GameList`] is a user's saved selection, independent of the query
//! view. Games enter and leave the list through short selection tokens
//! resolved against an ordered snapshot (usually the planner's last
//! output).

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, SeekerError};
use crate::game::BoardGame;

/// Token that selects or clears the whole snapshot/selection.
const ALL_TOKEN: &str = "all";

static RANGE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)-(\d+)$").expect("range pattern"));
static INDEX_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("index pattern"));
static NAME_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w+$").expect("name pattern"));

/// A saved selection of game names.
///
/// The list is a set: adds are idempotent and enumeration order via
/// [`names`](GameList::names) is not guaranteed. Index and range tokens
/// are 1-based; ranges are inclusive of both endpoints.
#[derive(Debug, Clone, Default)]
pub struct GameList {
    names: HashSet<String>,
}

impl GameList {
    /// Creates an empty list.
    pub fn new() -> Self {
        GameList::default()
    }

    /// Number of selected games.
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// `true` when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `true` when the selection contains `name` (case-sensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Selected names in no particular order.
    pub fn names(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }

    /// Selected names sorted case-insensitively.
    ///
    /// This is the order [`export`](GameList::export) writes and the order
    /// indexed [`remove`](GameList::remove) tokens resolve against.
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.names.iter().cloned().collect();
        names.sort_by(|a, b| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        });
        names
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Resolves a selection token against an ordered snapshot and adds the
    /// named games.
    ///
    /// Tokens:
    /// - `all` — every game in the snapshot
    /// - `N` — 1-based index into the snapshot
    /// - `N-M` — 1-based range, inclusive of both endpoints (`N-N` selects
    ///   one game); whitespace inside the token is ignored
    /// - a bare name (`\w+`) — exact, case-sensitive lookup in the snapshot
    ///
    /// Index and range tokens outside the snapshot fail with
    /// [`SeekerError::IndexOutOfRange`]; an absent name fails with
    /// [`SeekerError::NotFound`]; anything else fails with
    /// [`SeekerError::InvalidToken`]. Failures leave the selection
    /// unchanged.
    pub fn add(&mut self, token: &str, snapshot: &[BoardGame]) -> Result<()> {
        let token = token.trim();
        if token == ALL_TOKEN {
            self.names.extend(snapshot.iter().map(|g| g.name.clone()));
            return Ok(());
        }

        let compact: String = token.chars().filter(|c| !c.is_whitespace()).collect();
        if let Some(caps) = RANGE_TOKEN.captures(&compact) {
            let (start, end) = parse_range(&caps, token)?;
            if start >= end || end > snapshot.len() {
                return Err(SeekerError::IndexOutOfRange(token.to_string()));
            }
            self.names
                .extend(snapshot[start..end].iter().map(|g| g.name.clone()));
            return Ok(());
        }

        if INDEX_TOKEN.is_match(&compact) {
            let index = parse_index(&compact, snapshot.len(), token)?;
            self.names.insert(snapshot[index].name.clone());
            return Ok(());
        }

        if NAME_TOKEN.is_match(token) {
            let game = snapshot
                .iter()
                .find(|g| g.name == token)
                .ok_or_else(|| SeekerError::NotFound(token.to_string()))?;
            self.names.insert(game.name.clone());
            return Ok(());
        }

        Err(SeekerError::InvalidToken(token.to_string()))
    }

    /// Resolves a selection token against the current selection and
    /// removes the named games.
    ///
    /// The token forms match [`add`](GameList::add), but indices number
    /// the selection itself in its case-insensitive sorted order (the same
    /// order [`export`](GameList::export) writes), and `all` clears the
    /// selection. A name absent from the selection fails with
    /// [`SeekerError::NotFound`].
    pub fn remove(&mut self, token: &str) -> Result<()> {
        let token = token.trim();
        if token == ALL_TOKEN {
            self.clear();
            return Ok(());
        }

        let compact: String = token.chars().filter(|c| !c.is_whitespace()).collect();
        if let Some(caps) = RANGE_TOKEN.captures(&compact) {
            let names = self.sorted_names();
            let (start, end) = parse_range(&caps, token)?;
            if start >= end || end > names.len() {
                return Err(SeekerError::IndexOutOfRange(token.to_string()));
            }
            for name in &names[start..end] {
                self.names.remove(name);
            }
            return Ok(());
        }

        if INDEX_TOKEN.is_match(&compact) {
            let names = self.sorted_names();
            let index = parse_index(&compact, names.len(), token)?;
            self.names.remove(&names[index]);
            return Ok(());
        }

        if NAME_TOKEN.is_match(token) {
            if !self.names.remove(token) {
                return Err(SeekerError::NotFound(token.to_string()));
            }
            return Ok(());
        }

        Err(SeekerError::InvalidToken(token.to_string()))
    }

    /// Renders the selection as newline-terminated lines, one name per
    /// line, in case-insensitive sorted order.
    pub fn export(&self) -> String {
        let mut out = String::new();
        for name in self.sorted_names() {
            out.push_str(&name);
            out.push('\n');
        }
        out
    }

    /// Writes the exported lines to a file, creating or truncating it.
    ///
    /// I/O failures surface to the caller as [`SeekerError::Io`]; the
    /// in-memory selection is never affected.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(self.export().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// Parses a `N-M` range capture into a 0-based half-open `(start, end)`.
///
/// `start` is `N - 1` and `end` is `M`, so the 1-based range is inclusive
/// of both endpoints. A zero or unparsable bound is out of range.
fn parse_range(caps: &regex::Captures<'_>, token: &str) -> Result<(usize, usize)> {
    let out_of_range = || SeekerError::IndexOutOfRange(token.to_string());
    let start: usize = caps[1].parse().map_err(|_| out_of_range())?;
    let end: usize = caps[2].parse().map_err(|_| out_of_range())?;
    let start = start.checked_sub(1).ok_or_else(out_of_range)?;
    Ok((start, end))
}

/// Parses a 1-based index token, bounds-checked against `len`, into a
/// 0-based index.
fn parse_index(compact: &str, len: usize, token: &str) -> Result<usize> {
    compact
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
        .ok_or_else(|| SeekerError::IndexOutOfRange(token.to_string()))
}
