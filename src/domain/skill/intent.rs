//! The closed set of requests the skill understands.

use std::fmt;

use super::envelope::{SkillRequest, INTENT_REQUEST, LAUNCH_REQUEST, SESSION_ENDED_REQUEST};

/// Custom intent carrying the free-text question.
pub const GPT_QUERY_INTENT: &str = "GptQueryIntent";
/// Built-in cancel intent.
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
/// Built-in stop intent.
pub const STOP_INTENT: &str = "AMAZON.StopIntent";
/// Slot holding the recognized question text.
pub const QUERY_SLOT: &str = "query";

/// A classified inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillIntent {
    /// The user opened the skill.
    Launch,
    /// The user asked a question; `query` is the raw slot value, if any.
    GptQuery { query: Option<String> },
    /// The user asked to cancel or stop.
    CancelOrStop,
    /// The platform closed the session.
    SessionEnded { reason: Option<String> },
    /// Any request type or intent name outside the set above.
    Unrecognized {
        request_type: String,
        intent_name: Option<String>,
    },
}

/// Discriminant of [`SkillIntent`] used to key handler registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentKind {
    Launch,
    GptQuery,
    CancelOrStop,
    SessionEnded,
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IntentKind::Launch => "LaunchRequest",
            IntentKind::GptQuery => "GptQueryIntent",
            IntentKind::CancelOrStop => "AMAZON.CancelIntent|AMAZON.StopIntent",
            IntentKind::SessionEnded => "SessionEndedRequest",
        };
        f.write_str(s)
    }
}

impl SkillIntent {
    /// Classifies a request by its type tag and, for intent requests, its
    /// intent name.
    pub fn classify(request: &SkillRequest) -> Self {
        match request.request_type.as_str() {
            LAUNCH_REQUEST => SkillIntent::Launch,
            SESSION_ENDED_REQUEST => SkillIntent::SessionEnded {
                reason: request.reason.clone(),
            },
            INTENT_REQUEST => match request.intent.as_ref() {
                Some(intent) if intent.name == GPT_QUERY_INTENT => SkillIntent::GptQuery {
                    query: intent.slot_value(QUERY_SLOT).map(str::to_string),
                },
                Some(intent) if intent.name == CANCEL_INTENT || intent.name == STOP_INTENT => {
                    SkillIntent::CancelOrStop
                }
                other => SkillIntent::Unrecognized {
                    request_type: request.request_type.clone(),
                    intent_name: other.map(|i| i.name.clone()),
                },
            },
            other => SkillIntent::Unrecognized {
                request_type: other.to_string(),
                intent_name: None,
            },
        }
    }

    /// The registration key, or `None` for unrecognized requests.
    pub fn kind(&self) -> Option<IntentKind> {
        match self {
            SkillIntent::Launch => Some(IntentKind::Launch),
            SkillIntent::GptQuery { .. } => Some(IntentKind::GptQuery),
            SkillIntent::CancelOrStop => Some(IntentKind::CancelOrStop),
            SkillIntent::SessionEnded { .. } => Some(IntentKind::SessionEnded),
            SkillIntent::Unrecognized { .. } => None,
        }
    }

    /// Short label for logs.
    pub fn label(&self) -> String {
        match self {
            SkillIntent::Unrecognized {
                request_type,
                intent_name: Some(name),
            } => format!("{}:{}", request_type, name),
            SkillIntent::Unrecognized { request_type, .. } => request_type.clone(),
            known => known
                .kind()
                .map(|k| k.to_string())
                .unwrap_or_default(),
        }
    }
}
