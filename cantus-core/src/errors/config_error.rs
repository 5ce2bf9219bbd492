//! Configuration loading errors.

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable '{var}' is not set")]
    MissingEnv { var: &'static str },

    #[error("failed to parse config file: {message}")]
    Parse { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
