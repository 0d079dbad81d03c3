//! HTTP handlers for the skill endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::application::handlers::skill::Skill;
use crate::domain::skill::RequestEnvelope;

use super::dto::{ErrorResponse, HealthResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SkillAppState {
    skill: Arc<Skill>,
}

impl SkillAppState {
    pub fn new(skill: Arc<Skill>) -> Self {
        Self { skill }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════════════

/// Failures before the request reaches the skill.
#[derive(Debug, Error)]
pub enum SkillApiError {
    #[error("invalid request envelope: {0}")]
    InvalidEnvelope(String),
}

impl From<JsonRejection> for SkillApiError {
    fn from(rejection: JsonRejection) -> Self {
        SkillApiError::InvalidEnvelope(rejection.body_text())
    }
}

impl IntoResponse for SkillApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "rejected skill request");
        match self {
            SkillApiError::InvalidEnvelope(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(self.to_string())),
            )
                .into_response(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /skill - Handle one platform request envelope
pub async fn handle_skill_request(
    State(state): State<SkillAppState>,
    payload: Result<Json<RequestEnvelope>, JsonRejection>,
) -> Result<Response, SkillApiError> {
    let Json(envelope) = payload?;

    tracing::info!(
        request_type = %envelope.request.request_type,
        request_id = envelope.request.request_id.as_deref().unwrap_or_default(),
        "skill request"
    );

    let response = state.skill.invoke(envelope).await;
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// GET /health - Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
