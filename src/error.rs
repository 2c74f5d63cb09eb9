//! Error type shared by every tour-finding operation.

use thiserror::Error as ThisError;

/// Errors raised while validating input or building a tour.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The point set or a route order is unusable.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Edges committed by the matrix reduction do not chain into one cycle.
    #[error("disconnected tours: {0}")]
    DisconnectedTours(String),
    /// The exhaustive search was asked to enumerate more points than allowed.
    #[error("exhaustive search over {points} points exceeds the limit of {limit}")]
    TooManyPoints {
        /// Number of points in the instance.
        points: usize,
        /// Configured upper bound.
        limit: usize,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn disconnected(message: impl Into<String>) -> Self {
        Self::DisconnectedTours(message.into())
    }

    /// Returns `true` for failures the exhaustive search can recover from.
    pub fn is_disconnected(&self) -> bool {
        matches!(self, Self::DisconnectedTours(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = Error::invalid_input("need at least 2 points, got 1");
        assert_eq!(e.to_string(), "invalid input: need at least 2 points, got 1");

        let e = Error::TooManyPoints {
            points: 12,
            limit: 10,
        };
        assert_eq!(
            e.to_string(),
            "exhaustive search over 12 points exceeds the limit of 10"
        );
    }

    #[test]
    fn test_is_disconnected() {
        assert!(Error::disconnected("no successor for 3").is_disconnected());
        assert!(!Error::invalid_input("x").is_disconnected());
    }
}
