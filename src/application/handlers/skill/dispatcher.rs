//! Skill dispatcher: routes each request to the first handler that accepts it.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::application::handlers::completion::CompletionBridge;
use crate::domain::skill::{IntentKind, RequestEnvelope, ResponseEnvelope, SkillResponse};

use super::cancel_stop::CancelOrStopIntentHandler;
use super::catch_all::CatchAllExceptionHandler;
use super::gpt_query::GptQueryIntentHandler;
use super::handler::{ExceptionHandler, HandlerInput, RequestHandler, SkillError};
use super::launch::LaunchRequestHandler;
use super::session_ended::SessionEndedRequestHandler;

/// Registration errors, raised once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkillBuildError {
    #[error("intent {kind} is handled by both {first} and {second}")]
    DuplicateHandler {
        kind: IntentKind,
        first: &'static str,
        second: &'static str,
    },

    #[error("at least one exception handler is required")]
    MissingExceptionHandler,
}

/// Collects handlers before building a [`Skill`].
#[derive(Default)]
pub struct SkillBuilder {
    request_handlers: Vec<Arc<dyn RequestHandler>>,
    exception_handlers: Vec<Arc<dyn ExceptionHandler>>,
}

impl SkillBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_request_handler(mut self, handler: impl RequestHandler + 'static) -> Self {
        self.request_handlers.push(Arc::new(handler));
        self
    }

    pub fn add_exception_handler(mut self, handler: impl ExceptionHandler + 'static) -> Self {
        self.exception_handlers.push(Arc::new(handler));
        self
    }

    /// Validates the registration.
    ///
    /// Each intent kind may belong to one handler only, and some exception
    /// handler must exist to answer unrouted requests.
    pub fn build(self) -> Result<Skill, SkillBuildError> {
        let mut owners: HashMap<IntentKind, &'static str> = HashMap::new();
        for handler in &self.request_handlers {
            for kind in handler.intents() {
                if let Some(first) = owners.insert(*kind, handler.name()) {
                    return Err(SkillBuildError::DuplicateHandler {
                        kind: *kind,
                        first,
                        second: handler.name(),
                    });
                }
            }
        }

        if self.exception_handlers.is_empty() {
            return Err(SkillBuildError::MissingExceptionHandler);
        }

        Ok(Skill {
            request_handlers: self.request_handlers,
            exception_handlers: self.exception_handlers,
        })
    }
}

/// A built skill. Stateless between requests; everything per-session
/// travels in the envelope.
pub struct Skill {
    request_handlers: Vec<Arc<dyn RequestHandler>>,
    exception_handlers: Vec<Arc<dyn ExceptionHandler>>,
}

impl Skill {
    /// Handles one request. Never fails: errors go through the exception
    /// handlers.
    pub async fn invoke(&self, envelope: RequestEnvelope) -> ResponseEnvelope {
        let mut input = HandlerInput::new(envelope);

        let response = match self.dispatch(&mut input).await {
            Ok(response) => response,
            Err(error) => self.handle_error(&mut input, &error),
        };

        ResponseEnvelope::new(response, input.into_attributes().into_map())
    }

    async fn dispatch(&self, input: &mut HandlerInput) -> Result<SkillResponse, SkillError> {
        let handler = self
            .request_handlers
            .iter()
            .find(|h| h.can_handle(input))
            .ok_or_else(|| SkillError::NoHandler(input.intent().label()))?;

        tracing::debug!(
            handler = handler.name(),
            session_id = input.session_id().unwrap_or_default(),
            "dispatching request"
        );

        handler.handle(input).await
    }

    fn handle_error(&self, input: &mut HandlerInput, error: &SkillError) -> SkillResponse {
        match self
            .exception_handlers
            .iter()
            .find(|h| h.can_handle(input, error))
        {
            Some(handler) => handler.handle(input, error),
            None => {
                tracing::error!(error = %error, "no exception handler accepted the error");
                SkillResponse::default()
            }
        }
    }
}

/// The production registration: launch, query, cancel/stop and
/// session-ended handlers plus the catch-all.
pub fn standard_skill(bridge: CompletionBridge) -> Result<Skill, SkillBuildError> {
    SkillBuilder::new()
        .add_request_handler(LaunchRequestHandler)
        .add_request_handler(GptQueryIntentHandler::new(bridge))
        .add_request_handler(CancelOrStopIntentHandler)
        .add_request_handler(SessionEndedRequestHandler)
        .add_exception_handler(CatchAllExceptionHandler)
        .build()
}
