//! Runtime value types for field comparison.
//!
//! A [`Value`] is the value of one game field at query time, borrowed from
//! the game record. Each variant corresponds to one [`FieldKind`] and
//! carries that kind's comparison rules.
//!
//! [`FieldKind`]: crate::field::FieldKind

use std::cmp::Ordering;

/// Runtime value of a game field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// Text value (borrowed).
    Text(&'a str),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Real(f64),
}

impl<'a> Value<'a> {
    /// Extracts the text value, if present.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the integer value, if present.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the floating-point value, if present.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(n) => Some(*n),
            _ => None,
        }
    }
}

/// Compares two values of the same kind.
///
/// Text compares case-insensitively; reals use exact value comparison.
/// Returns `None` for mismatched kinds or a NaN operand.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Option<Ordering> {
    match (a, b) {
        (Value::Text(a), Value::Text(b)) => Some(a.to_lowercase().cmp(&b.to_lowercase())),
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Real(a), Value::Real(b)) => a.partial_cmp(b),
        _ => None,
    }
}
