//! Filter clauses: compiling raw filter text and evaluating predicates.
//!
//! A [`Clause`] is one compiled predicate: a field, an operator, and a
//! typed literal. [`Clause::compile`] turns a comma-separated filter
//! string into a clause list; [`Clause::matches`] evaluates a clause
//! against one game.

use crate::error::{Result, SeekerError};
use crate::field::{FieldKind, GameField};
use crate::game::BoardGame;
use crate::op::Op;
use crate::value::Value;

/// Owned literal bound into a compiled clause.
///
/// The variant is fixed by the field's [`FieldKind`] at compile time, so
/// evaluation never re-parses the literal.
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseValue {
    /// Lower-cased text literal.
    Text(String),
    /// Integer literal.
    Int(i64),
    /// Floating-point literal.
    Real(f64),
}

/// A single compiled filter predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// The field to compare.
    pub field: GameField,
    /// The comparison operator.
    pub op: Op,
    /// The literal to compare against.
    pub value: ClauseValue,
}

impl Clause {
    /// Compiles a comma-separated filter string into clauses.
    ///
    /// Parsing is deliberately permissive about structure: a piece with no
    /// recognizable operator, a split that does not yield exactly two
    /// non-empty parts, or an unknown field contributes no constraint.
    /// Literals are strict: one that does not parse as the field's declared
    /// numeric kind fails the whole call with
    /// [`SeekerError::MalformedLiteral`] before anything is evaluated.
    ///
    /// An empty or all-invalid filter compiles to no clauses, which matches
    /// every game.
    pub fn compile(filter: &str) -> Result<Vec<Clause>> {
        let mut clauses = Vec::new();
        for piece in filter.split(',') {
            if let Some(clause) = Self::compile_one(piece.trim())? {
                clauses.push(clause);
            }
        }
        Ok(clauses)
    }

    fn compile_one(piece: &str) -> Result<Option<Clause>> {
        let Some(op) = Op::scan(piece) else {
            return Ok(None);
        };

        let compact: String = piece.chars().filter(|c| !c.is_whitespace()).collect();
        let Some((lhs, rhs)) = compact.split_once(op.token()) else {
            return Ok(None);
        };
        if lhs.is_empty() || rhs.is_empty() || rhs.contains(op.token()) {
            return Ok(None);
        }

        let Ok(field) = lhs.parse::<GameField>() else {
            return Ok(None);
        };

        let literal = rhs.to_lowercase();
        let value = match field.kind() {
            FieldKind::Text => ClauseValue::Text(literal),
            FieldKind::Integer => {
                ClauseValue::Int(literal.parse().map_err(|_| SeekerError::MalformedLiteral {
                    kind: "integer",
                    literal: literal.clone(),
                })?)
            }
            FieldKind::Real => {
                ClauseValue::Real(literal.parse().map_err(|_| SeekerError::MalformedLiteral {
                    kind: "real",
                    literal: literal.clone(),
                })?)
            }
        };

        Ok(Some(Clause { field, op, value }))
    }

    /// Evaluates this clause against a game.
    ///
    /// Dispatch follows the field's kind: text compares the lower-cased
    /// field value against the already-normalized literal; numerics compare
    /// through an [`Ordering`](std::cmp::Ordering). A NaN comparison never
    /// matches.
    pub fn matches(&self, game: &BoardGame) -> bool {
        match (self.field.value_of(game), &self.value) {
            (Value::Text(field), ClauseValue::Text(literal)) => {
                self.match_text(&field.to_lowercase(), literal)
            }
            (Value::Int(field), ClauseValue::Int(literal)) => {
                self.op.eval_ordering(field.cmp(literal))
            }
            (Value::Real(field), ClauseValue::Real(literal)) => match field.partial_cmp(literal) {
                Some(ordering) => self.op.eval_ordering(ordering),
                None => false,
            },
            // Kind mismatch cannot arise from compile(), which types the
            // literal from the field's declared kind.
            _ => false,
        }
    }

    fn match_text(&self, field: &str, literal: &str) -> bool {
        match self.op {
            Op::Eq => field == literal,
            Op::Ne => field != literal,
            Op::Contains => field.contains(literal),
            Op::Gt => field > literal,
            Op::Lt => field < literal,
            Op::Gte => field >= literal,
            Op::Lte => field <= literal,
        }
    }
}

/// Returns `true` when every clause matches the game (logical AND).
///
/// An empty clause list matches everything.
pub fn matches_all(clauses: &[Clause], game: &BoardGame) -> bool {
    clauses.iter().all(|clause| clause.matches(game))
}
