//! API routes module

pub mod tutor;

use std::sync::Arc;

use crate::api::state::AppState;
use axum::Router;

pub(crate) type SharedState = Arc<AppState>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Tutor routes
        .nest("/tutor", tutor::router())
}
