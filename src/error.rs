//! Error types for quiz operations.

use std::io;

use thiserror::Error;

/// Errors raised by the dataset, the session, and the terminal front-end.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The data source was unreachable or answered with a non-success status.
    #[error("failed to fetch character data: {0}")]
    FetchFailure(String),

    /// The fetched document contained no character with a usable age.
    #[error("no character with a valid age was found")]
    NoValidData,

    /// A type-in answer that is not a number.
    #[error("invalid answer: {0:?}")]
    InvalidInput(String),

    /// Settings that cannot start a session.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// The session is not running.
    #[error("no quiz is in progress")]
    NotInProgress,

    /// The current question already has an answer.
    #[error("the current question has already been answered")]
    AlreadyAnswered,

    /// `advance` was called before the current question was answered.
    #[error("the current question has not been answered yet")]
    NotAnswered,

    /// A multiple-choice submission that was not one of the offered options.
    #[error("{0} is not one of the offered options")]
    NotAnOption(i64),

    /// The preference file could not be written.
    #[error("failed to save preferences: {0}")]
    Preferences(String),

    /// IO error while driving the terminal.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl QuizError {
    /// Returns `true` for failures the user recovers from by starting again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, QuizError::FetchFailure(_) | QuizError::NoValidData)
    }
}
