//! Error taxonomy shared by the state machine and its effect runners.
//!
//! None of these are fatal. Each one leaves the application state at its
//! prior value and is surfaced through the status line.

use crate::model::GameSchemaError;
use thiserror::Error;

/// Local, synchronous rejection of a malformed configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Player count must be between 4 and 20.")]
    PlayerCountNotNumber(String),
    #[error("Player count must be between 4 and 20.")]
    PlayerCountOutOfRange(i64),
    #[error("Player names cannot be an empty list.")]
    PlayerNamesEmpty,
    #[error("Player name {} is blank.", .index + 1)]
    BlankPlayerName { index: usize },
    #[error("Seed must be a whole number.")]
    SeedNotNumber(String),
    #[error("Duration must be a positive number of minutes.")]
    DurationZero,
}

/// Failure reported by (or while talking to) a remote service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    Transport(String),
    #[error("{detail}")]
    Rejected { status: u16, detail: String },
    #[error("The server returned an unreadable response: {0}")]
    Malformed(String),
    #[error("The server returned an unusable game: {0}")]
    Invalid(#[from] GameSchemaError),
}

impl ServiceError {
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The durable key-value store could not be reached or written.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_error_surfaces_detail_verbatim() {
        let err = ServiceError::Rejected {
            status: 400,
            detail: String::from("player_names length must match player_count."),
        };
        assert_eq!(
            err.to_string(),
            "player_names length must match player_count."
        );
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn blank_name_message_is_one_based() {
        let err = ValidationError::BlankPlayerName { index: 0 };
        assert_eq!(err.to_string(), "Player name 1 is blank.");
    }

    #[test]
    fn out_of_range_count_names_the_bounds() {
        let err = ValidationError::PlayerCountOutOfRange(3);
        assert_eq!(err.to_string(), "Player count must be between 4 and 20.");
    }
}
