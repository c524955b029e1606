use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::DomainError;

/// Detail returned for every fault that is not the caller's doing
pub const INTERNAL_ERROR_DETAIL: &str = "internal server error";

/// API error type with HTTP status code and message
///
/// Renders as `{"detail": message}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 403 Forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 500 Internal Server Error
    ///
    /// The cause is logged; the client only sees the generic detail.
    pub fn internal_server_error(cause: impl Into<String>) -> Self {
        let cause = cause.into();
        tracing::error!(%cause, "internal server error");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_DETAIL)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "detail": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        let message = error.to_string();
        match error {
            DomainError::UserNotFound(_) | DomainError::PlaylistNotFound(_) => {
                Self::not_found(message)
            }
            DomainError::EmptyUpdate | DomainError::UnknownTrack(_) => Self::bad_request(message),
            DomainError::NotPlaylistOwner { .. } => Self::forbidden(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_status() {
        let cases = [
            (DomainError::UserNotFound(1), StatusCode::NOT_FOUND),
            (DomainError::PlaylistNotFound(1), StatusCode::NOT_FOUND),
            (DomainError::EmptyUpdate, StatusCode::BAD_REQUEST),
            (DomainError::UnknownTrack(999), StatusCode::BAD_REQUEST),
            (
                DomainError::NotPlaylistOwner {
                    playlist_id: 1,
                    user_id: 2,
                },
                StatusCode::FORBIDDEN,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).status, status);
        }
    }

    #[test]
    fn unknown_track_message_names_the_id() {
        let error = ApiError::from(DomainError::UnknownTrack(999));

        assert!(error.message.contains("999"));
    }

    #[test]
    fn internal_error_hides_cause() {
        let error = ApiError::internal_server_error("lock poisoned at store.rs:42");

        assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message, INTERNAL_ERROR_DETAIL);
    }
}
