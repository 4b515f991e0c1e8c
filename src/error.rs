//! Error types for the upload-insights library.

use thiserror::Error;

/// Errors that can occur while generating, loading or reporting uploads.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading configuration or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Event payload or report could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file is not valid TOML for the expected schema.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Command-line arguments were not understood.
    #[error("{0}")]
    Usage(String),
}

/// A specialized `Result` type for upload-insights operations.
pub type Result<T> = std::result::Result<T, Error>;
