//! Error types for URL normalization operations.

use thiserror::Error;

/// Errors that can occur while normalizing a URL.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizeError {
    /// The URL has no scheme and no base URL was supplied to resolve it against.
    #[error("relative URL requires a base URL")]
    MissingBaseUrl,

    /// No scheme delimiter was found, even after resolving against the base URL.
    #[error("URL has no scheme")]
    MissingScheme,

    /// The assembled absolute URL does not satisfy the URI grammar.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The scheme is outside what the HTTP normalizer accepts.
    #[error("unsupported scheme '{0}': only http and https are supported")]
    UnsupportedScheme(String),
}

impl From<url::ParseError> for NormalizeError {
    fn from(err: url::ParseError) -> Self {
        NormalizeError::InvalidUrl(err.to_string())
    }
}
