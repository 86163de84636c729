use crate::sdk::resolver::ResolveError;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Everything the HTTP boundary can answer with besides a result.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Body is not valid JSON. Surfaced as a 500 with the parser's message.
    #[error("Invalid JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// Body could not be buffered (too large, aborted stream).
    #[error("{0}")]
    UnreadableBody(#[from] BytesRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Resolve(ResolveError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            ApiError::Resolve(ResolveError::AddressNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Resolve(ResolveError::MissingConfiguration)
            | ApiError::Resolve(ResolveError::GeocodingServiceError(_))
            | ApiError::MalformedBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::UnreadableBody(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            log::error!("Request failed with {}: {}", status, message);
        } else {
            log::warn!("Request rejected with {}: {}", status, message);
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::geocoding::GeocodingError;

    #[test]
    fn maps_each_error_to_its_status() {
        let cases = [
            (
                ApiError::from(ResolveError::InvalidInput("x".into())),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(ResolveError::AddressNotFound("x".into())),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(ResolveError::MissingConfiguration),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApiError::from(ResolveError::from(GeocodingError::Timeout)),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApiError::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.status(), status, "{err}");
        }
    }

    #[test]
    fn resolve_errors_keep_their_message() {
        let err = ApiError::from(ResolveError::MissingConfiguration);
        assert_eq!(err.to_string(), "Geocoding API key is not configured");
    }
}
