use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("duplicate player name: {0}")]
    DuplicatePlayer(String),

    #[error("board of length {length} cannot fit {requested} components")]
    BoardTooSmall { length: usize, requested: usize },

    // Internal contract violation in a RandomSource; not user-recoverable.
    #[error("invalid random range: low {low} > high {high}")]
    InvalidRange { low: usize, high: usize },
}
