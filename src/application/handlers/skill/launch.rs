//! LaunchRequest handler.

use async_trait::async_trait;

use crate::domain::skill::{IntentKind, ResponseBuilder, SkillResponse};

use super::handler::{HandlerInput, RequestHandler, SkillError};

/// Greeting spoken (and re-prompted) when the skill opens.
pub const LAUNCH_GREETING: &str = "Chat G.P.T. mode activated";

/// Greets the user and keeps the session open.
pub struct LaunchRequestHandler;

#[async_trait]
impl RequestHandler for LaunchRequestHandler {
    fn name(&self) -> &'static str {
        "LaunchRequestHandler"
    }

    fn intents(&self) -> &'static [IntentKind] {
        &[IntentKind::Launch]
    }

    async fn handle(&self, _input: &mut HandlerInput) -> Result<SkillResponse, SkillError> {
        Ok(ResponseBuilder::new()
            .speak(LAUNCH_GREETING)
            .ask(LAUNCH_GREETING)
            .build())
    }
}
