//! Router for the tutor API

use axum::{
    Json, Router,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    routing::post,
};
use serde_json::Value;

use super::public;
use crate::api::public::ApiError;
use crate::api::routes::SharedState;
use crate::tutor::normalize;

/// Answer a question. The body is parsed by hand so that any JSON
/// shape gets through to normalization, whatever the content type. A
/// body that can't be read (e.g. over the size limit) still gets an
/// `{answer}` response.
async fn ask_tutor(
    State(state): State<SharedState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<public::AnswerResponse>, ApiError> {
    let payload: Value = serde_json::from_slice(&body?)?;
    let request = normalize(&payload);

    tracing::debug!(
        "Tutor request: {} question chars, {} history messages",
        request.question.chars().count(),
        request.history.len()
    );

    let answer = state.gateway.answer(&request).await?;
    Ok(Json(public::AnswerResponse::new(&answer)))
}

/// Create the tutor router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(ask_tutor))
}
