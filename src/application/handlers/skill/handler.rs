//! Handler seams for the skill dispatcher.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::skill::{
    IntentKind, RequestEnvelope, SessionAttributes, SkillIntent, SkillRequest, SkillResponse,
};

/// Errors raised while dispatching one request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkillError {
    /// No registered handler accepts the request.
    #[error("no handler for request {0}")]
    NoHandler(String),

    /// Session attributes could not be read.
    #[error("invalid session attributes: {0}")]
    Session(#[from] ValidationError),
}

/// Everything a handler sees for one request.
#[derive(Debug, Clone)]
pub struct HandlerInput {
    envelope: RequestEnvelope,
    intent: SkillIntent,
    attributes: SessionAttributes,
}

impl HandlerInput {
    /// Classifies the request and copies its session attributes.
    pub fn new(envelope: RequestEnvelope) -> Self {
        let intent = SkillIntent::classify(&envelope.request);
        let attributes = envelope
            .session
            .as_ref()
            .and_then(|s| s.attributes.clone())
            .map(SessionAttributes::new)
            .unwrap_or_default();

        Self {
            envelope,
            intent,
            attributes,
        }
    }

    pub fn request(&self) -> &SkillRequest {
        &self.envelope.request
    }

    pub fn intent(&self) -> &SkillIntent {
        &self.intent
    }

    pub fn session_id(&self) -> Option<&str> {
        self.envelope.session.as_ref().map(|s| s.session_id.as_str())
    }

    pub fn attributes(&self) -> &SessionAttributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut SessionAttributes {
        &mut self.attributes
    }

    /// Consumes the input, returning the attributes to send back.
    pub fn into_attributes(self) -> SessionAttributes {
        self.attributes
    }
}

/// Handles one or more intent kinds.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Intent kinds this handler covers. Two registered handlers may not
    /// share a kind.
    fn intents(&self) -> &'static [IntentKind];

    /// Capability predicate tested in registration order.
    fn can_handle(&self, input: &HandlerInput) -> bool {
        input
            .intent()
            .kind()
            .is_some_and(|kind| self.intents().contains(&kind))
    }

    async fn handle(&self, input: &mut HandlerInput) -> Result<SkillResponse, SkillError>;
}

/// Turns a dispatch error into a response.
pub trait ExceptionHandler: Send + Sync {
    fn can_handle(&self, input: &HandlerInput, error: &SkillError) -> bool;

    fn handle(&self, input: &mut HandlerInput, error: &SkillError) -> SkillResponse;
}
