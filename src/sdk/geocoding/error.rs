use serde::Deserialize;
use thiserror::Error;

// Error body the provider sends alongside non-2xx statuses
#[derive(Deserialize, Debug)]
pub struct ProviderErrorPayload {
    pub message: String,
}

#[derive(Error, Debug)]
pub enum GeocodingError {
    // Structured error reported by the provider
    #[error("provider returned status {status}: {message}")]
    ApiError { status: u16, message: String },

    // Fallback for error bodies that aren't in the expected JSON format
    #[error("provider returned status {status}: {body}")]
    RawApiError { status: u16, body: String },

    #[error("request to provider timed out")]
    Timeout,

    #[error("request to provider failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("failed to parse provider response: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("invalid provider base url: {0}")]
    InvalidBaseUrl(String),
}

impl GeocodingError {
    /// Maps a reqwest failure, keeping timeouts distinguishable.
    ///
    /// The URL is dropped because it carries the access token.
    pub fn transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GeocodingError::Timeout
        } else {
            GeocodingError::RequestError(err.without_url())
        }
    }
}
