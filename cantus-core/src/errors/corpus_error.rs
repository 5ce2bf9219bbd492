//! Corpus-level loading errors.

use super::score_error::ScoreError;

/// Errors that can occur while loading a corpus of pieces.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("unsupported repertoire/genre: '{repertoire}'")]
    UnsupportedRepertoire { repertoire: String },

    #[error("invalid filename pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error(transparent)]
    Score(#[from] ScoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
