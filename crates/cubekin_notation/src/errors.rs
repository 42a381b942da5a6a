use thiserror::Error;

/// Error produced when parsing a move token.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MoveParseError {
    /// Token is not one of the 18 face-turn moves
    #[error("unknown move: {0:?}")]
    UnknownMove(String),
    /// Token has a valid face letter but an unsupported suffix
    #[error("bad multiplier {suffix:?} in move {token:?}")]
    BadMultiplier {
        /// Full token.
        token: String,
        /// Suffix after the face letter.
        suffix: String,
    },
}

impl MoveParseError {
    /// Returns the token that failed to parse.
    pub fn token(&self) -> &str {
        match self {
            MoveParseError::UnknownMove(token) => token,
            MoveParseError::BadMultiplier { token, .. } => token,
        }
    }
}
