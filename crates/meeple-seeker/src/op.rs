//! Comparison operators for filter clauses.
//!
//! The [`Op`] enum defines the seven clause operators and the literal
//! tokens that introduce them inside raw filter text.

use std::cmp::Ordering;

/// Comparison operator inside a filter clause.
///
/// `Contains` is only meaningful for text fields. The numeric evaluation
/// path routes through [`Op::eval_ordering`], which has no contains case,
/// so a contains-clause on a numeric field matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// Substring match (text fields only).
    Contains,
    /// Greater than.
    Gt,
    /// Less than.
    Lt,
    /// Greater than or equal.
    Gte,
    /// Less than or equal.
    Lte,
}

// Two-character tokens must come before their one-character prefixes so
// ">=" is never read as ">".
const SCAN_ORDER: [Op; 7] = [Op::Gte, Op::Lte, Op::Eq, Op::Ne, Op::Contains, Op::Gt, Op::Lt];

impl Op {
    /// The literal token that introduces this operator in a clause.
    pub fn token(self) -> &'static str {
        match self {
            Op::Eq => "==",
            Op::Ne => "!=",
            Op::Contains => "~=",
            Op::Gt => ">",
            Op::Lt => "<",
            Op::Gte => ">=",
            Op::Lte => "<=",
        }
    }

    /// Finds the operator present in a raw clause, longest token first.
    ///
    /// Returns `None` when no operator substring is present.
    ///
    /// ```
    /// use meeple_seeker::Op;
    ///
    /// assert_eq!(Op::scan("minplayers>=2"), Some(Op::Gte));
    /// assert_eq!(Op::scan("minplayers>2"), Some(Op::Gt));
    /// assert_eq!(Op::scan("minplayers"), None);
    /// ```
    pub fn scan(clause: &str) -> Option<Op> {
        SCAN_ORDER.into_iter().find(|op| clause.contains(op.token()))
    }

    /// Evaluates this operator against an ordering between two values.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
            Op::Contains => false, // not an ordering-based operator
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}
