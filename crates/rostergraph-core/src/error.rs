//! Error types for RosterGraph.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Player with id '{0}' not found")]
    PlayerNotFound(String),

    #[error("No player found matching '{0}'")]
    NoPlayerMatching(String),

    #[error("No path from '{from}' to '{to}'")]
    NoPath { from: String, to: String },

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// True for the lookup failures a caller should report as "not found".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PlayerNotFound(_) | Self::NoPlayerMatching(_) | Self::NoPath { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(Error::PlayerNotFound("p1".into()).is_not_found());
        assert!(Error::NoPlayerMatching("smith".into()).is_not_found());
        assert!(Error::NoPath {
            from: "a".into(),
            to: "b".into()
        }
        .is_not_found());
        assert!(!Error::Config("bad".into()).is_not_found());
    }

    #[test]
    fn test_messages_carry_identifier() {
        let err = Error::PlayerNotFound("abc123".into());
        assert_eq!(err.to_string(), "Player with id 'abc123' not found");

        let err = Error::NoPath {
            from: "a".into(),
            to: "b".into(),
        };
        assert!(err.to_string().contains("'a'"));
        assert!(err.to_string().contains("'b'"));
    }
}
