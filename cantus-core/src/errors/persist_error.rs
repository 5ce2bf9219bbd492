//! Collection persistence errors.

/// Errors that can occur while saving or loading a serialized
/// result collection.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("failed to encode result collection: {message}")]
    Encode { message: String },

    #[error("failed to decode result collection: {message}")]
    Decode { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
