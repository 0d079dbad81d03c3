//! HTTP routes for the skill endpoint.

use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use super::handlers::{handle_skill_request, health, SkillAppState};

/// Creates the skill router.
///
/// `request_timeout` bounds each request end to end, completion call
/// included.
pub fn skill_router(state: SkillAppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/skill", post(handle_skill_request))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}
