//! Catch-all exception handler.

use crate::domain::skill::{ResponseBuilder, SkillResponse};

use super::handler::{ExceptionHandler, HandlerInput, SkillError};

/// Apology spoken (and re-prompted) for any dispatch error.
pub const APOLOGY: &str = "Sorry, I had trouble doing what you asked. Please try again.";

/// Logs any dispatch error and apologizes, keeping the session open.
pub struct CatchAllExceptionHandler;

impl ExceptionHandler for CatchAllExceptionHandler {
    fn can_handle(&self, _input: &HandlerInput, _error: &SkillError) -> bool {
        true
    }

    fn handle(&self, input: &mut HandlerInput, error: &SkillError) -> SkillResponse {
        tracing::error!(
            error = %error,
            request = %input.intent().label(),
            session_id = input.session_id().unwrap_or_default(),
            "skill request failed"
        );

        ResponseBuilder::new().speak(APOLOGY).ask(APOLOGY).build()
    }
}
