//! Public API types

use std::any::Any;

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

use crate::tutor::TutorError;

/// Answer text used when a fault carries no message of its own.
pub const SERVER_ERROR: &str = "Server error";

// Errors

pub struct ApiError(anyhow::Error);

/// Convert `ApiError` into an Axum compatible response. Known tutor
/// outcomes keep their own status code, everything else is a 500.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self
            .0
            .downcast_ref::<TutorError>()
            .map(TutorError::status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match self.0.downcast_ref::<TutorError>() {
            Some(TutorError::Upstream {
                status: upstream_status,
                ..
            }) => {
                tracing::warn!(
                    "Completion failed with upstream status {}: {}",
                    upstream_status,
                    self.0
                );
            }
            _ if status.is_server_error() => tracing::error!("{:#}", self.0),
            _ => tracing::debug!("Rejected request: {}", self.0),
        }

        let message = self.0.to_string();
        (status, Json(tutor::AnswerResponse::new(answer_text(&message)))).into_response()
    }
}

/// Enables using `?` on functions that return `Result<_,
/// anyhow::Error>` to turn them into `Result<_, ApiError>`
impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Last line of defense for a panicking handler so the client still
/// gets the usual response shape, with the panic message as the
/// answer when there is one.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        ""
    };
    tracing::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(tutor::AnswerResponse::new(answer_text(detail))),
    )
        .into_response()
}

// A fault with no usable message still answers with something
fn answer_text(message: &str) -> &str {
    if message.trim().is_empty() {
        SERVER_ERROR
    } else {
        message
    }
}

// Re-export public types from each route

pub mod tutor {
    pub use crate::api::routes::tutor::public::*;
}
