//! Error types for the vehicle cost predictor

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing setting `{0}` (set it with `tuners-cost config` or the environment)")]
    Missing(&'static str),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Prediction API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Please provide an image URL or upload a file.")]
    NoInput,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid image format: {0}")]
    InvalidImageFormat(String),

    #[error("Invalid image URL: {0}")]
    InvalidUrl(String),
}

impl Error {
    /// True for input problems caught before any request is sent
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::NoInput
                | Error::FileNotFound(_)
                | Error::InvalidImageFormat(_)
                | Error::InvalidUrl(_)
        )
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::InvalidImageFormat(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::InvalidUrl(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
