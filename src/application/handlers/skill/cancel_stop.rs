//! Cancel / Stop intent handler.

use async_trait::async_trait;

use crate::domain::skill::{IntentKind, ResponseBuilder, SkillResponse};

use super::handler::{HandlerInput, RequestHandler, SkillError};

/// Farewell spoken before the session closes.
pub const FAREWELL: &str = "Leaving Chat G.P.T. mode";

/// Says goodbye and closes the session without a re-prompt.
pub struct CancelOrStopIntentHandler;

#[async_trait]
impl RequestHandler for CancelOrStopIntentHandler {
    fn name(&self) -> &'static str {
        "CancelOrStopIntentHandler"
    }

    fn intents(&self) -> &'static [IntentKind] {
        &[IntentKind::CancelOrStop]
    }

    async fn handle(&self, _input: &mut HandlerInput) -> Result<SkillResponse, SkillError> {
        Ok(ResponseBuilder::new().speak(FAREWELL).end_session().build())
    }
}
