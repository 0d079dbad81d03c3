//! SessionEndedRequest handler.

use async_trait::async_trait;

use crate::domain::skill::{IntentKind, SkillResponse};

use super::handler::{HandlerInput, RequestHandler, SkillError};

/// Drops the session context. The platform accepts no speech here, so the
/// response is empty.
pub struct SessionEndedRequestHandler;

#[async_trait]
impl RequestHandler for SessionEndedRequestHandler {
    fn name(&self) -> &'static str {
        "SessionEndedRequestHandler"
    }

    fn intents(&self) -> &'static [IntentKind] {
        &[IntentKind::SessionEnded]
    }

    async fn handle(&self, input: &mut HandlerInput) -> Result<SkillResponse, SkillError> {
        let request = input.request();
        tracing::info!(
            session_id = input.session_id().unwrap_or_default(),
            reason = request.reason.as_deref().unwrap_or("UNKNOWN"),
            error = request.error.as_ref().and_then(|e| e.message.as_deref()),
            "session ended"
        );

        input.attributes_mut().clear_context();
        Ok(SkillResponse::default())
    }
}
