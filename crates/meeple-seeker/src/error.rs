//! Error types for the seeker crate.

use thiserror::Error;

/// Errors produced while compiling filters or resolving selection tokens.
#[derive(Debug, Error)]
pub enum SeekerError {
    /// Field token does not name a known game attribute.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    /// Literal could not be parsed as the field's declared type.
    #[error("malformed {kind} literal '{literal}'")]
    MalformedLiteral {
        kind: &'static str,
        literal: String,
    },

    /// Index or range token falls outside the snapshot or selection.
    #[error("index out of range: '{0}'")]
    IndexOutOfRange(String),

    /// Named game is not present where the token looked for it.
    #[error("no game named '{0}'")]
    NotFound(String),

    /// Selection token matches none of the recognized forms.
    #[error("invalid selection token '{0}'")]
    InvalidToken(String),

    /// Failure writing a saved list.
    #[error("failed to write list: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
