//! Error types for the frame exporter

use thiserror::Error;

/// Result type alias for exporter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching or rendering a frame
#[derive(Error, Debug)]
pub enum Error {
    /// A pasted design link could not be parsed into a file key
    #[error("Invalid design link: {0}")]
    UrlError(String),

    /// The requested node id is absent from the current file state.
    /// A normal outcome, distinct from transport failure.
    #[error("Frame not found: {0}")]
    NotFound(String),

    /// The upstream design API answered with a non-success status
    #[error("Upstream API error (status {status}): {message}")]
    UpstreamError { status: u16, message: String },

    /// Transport-level failure reaching the upstream API
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The upstream answered 2xx but the payload did not decode
    #[error("Malformed upstream payload: {0}")]
    DecodeError(String),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::DecodeError(err.to_string())
        } else {
            Error::NetworkError(err.to_string())
        }
    }
}
