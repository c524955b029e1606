use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::api::errors::{ApiError, INTERNAL_ERROR_DETAIL};

/// Turns a handler panic into a generic 500 response
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`. The panic
/// payload is logged and never sent to the client.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let reason = if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else {
        "unknown panic payload"
    };

    tracing::error!(%reason, "handler panicked");

    ApiError::new(
        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        INTERNAL_ERROR_DETAIL,
    )
    .into_response()
}
