//! Plot-export errors.

/// Errors that can occur while exporting plots from a result collection.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// A results bucket is missing an entry the export driver requires.
    /// This indicates a caller-side insertion bug, not a data problem.
    #[error("results bucket '{bucket}' has no '{key}' entry")]
    MissingKey { bucket: String, key: String },

    #[error("rendering failed for '{path}': {message}")]
    Render { path: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
