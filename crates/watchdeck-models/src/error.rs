use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),

    #[error("invalid rating '{0}'")]
    InvalidRating(String),

    #[error("unknown content type '{0}' (expected movie, series or documentary)")]
    UnknownContentType(String),

    #[error("unknown platform '{0}' (expected netflix, prime, apple, hbo, disney or theaters)")]
    UnknownPlatform(String),
}
