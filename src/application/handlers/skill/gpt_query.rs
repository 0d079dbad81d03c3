//! GptQueryIntent handler: forwards the question to the completion bridge.

use async_trait::async_trait;

use crate::application::handlers::completion::{error_reply, CompletionBridge};
use crate::domain::conversation::ContextMessage;
use crate::domain::foundation::UserQuery;
use crate::domain::skill::{IntentKind, ResponseBuilder, SkillIntent, SkillResponse};

use super::handler::{HandlerInput, RequestHandler, SkillError};

/// Re-prompt after every answer.
pub const FOLLOW_UP_PROMPT: &str = "Any other questions?";

/// Spoken when the query slot is absent or blank.
pub const MISSING_QUERY_REPLY: &str = "Sorry, I didn't catch your question. Please try again.";

/// Answers a question using the prior exchange as context.
///
/// On success the stored context becomes exactly the latest exchange. A
/// failed completion is spoken but leaves the stored context as it was.
pub struct GptQueryIntentHandler {
    bridge: CompletionBridge,
}

impl GptQueryIntentHandler {
    pub fn new(bridge: CompletionBridge) -> Self {
        Self { bridge }
    }
}

#[async_trait]
impl RequestHandler for GptQueryIntentHandler {
    fn name(&self) -> &'static str {
        "GptQueryIntentHandler"
    }

    fn intents(&self) -> &'static [IntentKind] {
        &[IntentKind::GptQuery]
    }

    async fn handle(&self, input: &mut HandlerInput) -> Result<SkillResponse, SkillError> {
        let raw = match input.intent() {
            SkillIntent::GptQuery { query } => query.clone(),
            other => return Err(SkillError::NoHandler(other.label())),
        };

        let query = match raw.map(UserQuery::new) {
            Some(Ok(query)) => query,
            _ => {
                tracing::warn!(
                    session_id = input.session_id().unwrap_or_default(),
                    "query slot missing or blank"
                );
                return Ok(ResponseBuilder::new()
                    .speak(MISSING_QUERY_REPLY)
                    .ask(FOLLOW_UP_PROMPT)
                    .build());
            }
        };

        let context = input.attributes().context()?;

        let speech = match self
            .bridge
            .try_generate(query.as_str(), context.as_deref())
            .await
        {
            Ok(reply) => {
                input
                    .attributes_mut()
                    .set_context(&ContextMessage::exchange(query.as_str(), reply.as_str()));
                reply
            }
            Err(err) => error_reply(&err),
        };

        Ok(ResponseBuilder::new()
            .speak(speech)
            .ask(FOLLOW_UP_PROMPT)
            .build())
    }
}
