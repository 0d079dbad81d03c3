//! Inbound request envelope sent by the voice platform.
//!
//! Only the fields the skill reads are modelled; everything else in the
//! platform's JSON is ignored on deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level request body posted to the skill endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    /// Envelope format version.
    #[serde(default = "default_version")]
    pub version: String,
    /// Session the request belongs to (absent for some out-of-session events).
    #[serde(default)]
    pub session: Option<Session>,
    /// The request itself.
    pub request: SkillRequest,
}

/// Session block of the envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// True on the first request of a session.
    #[serde(default)]
    pub new: bool,
    /// Platform-assigned session identifier.
    #[serde(default)]
    pub session_id: String,
    /// Attributes echoed back from the previous response.
    #[serde(default)]
    pub attributes: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub application: Option<Application>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
}

/// The request block: a type tag plus type-specific fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRequest {
    /// `LaunchRequest`, `IntentRequest`, `SessionEndedRequest`, ...
    #[serde(rename = "type")]
    pub request_type: String,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub locale: Option<String>,
    /// Present on `IntentRequest`.
    #[serde(default)]
    pub intent: Option<Intent>,
    /// Present on `SessionEndedRequest`.
    #[serde(default)]
    pub reason: Option<String>,
    /// Present on `SessionEndedRequest` when the session ended on an error.
    #[serde(default)]
    pub error: Option<RequestError>,
}

impl SkillRequest {
    /// Creates a request of the given type with no optional fields.
    pub fn of_type(request_type: impl Into<String>) -> Self {
        Self {
            request_type: request_type.into(),
            request_id: None,
            timestamp: None,
            locale: None,
            intent: None,
            reason: None,
            error: None,
        }
    }

    /// Creates an `IntentRequest` for the given intent.
    pub fn intent(intent: Intent) -> Self {
        Self {
            intent: Some(intent),
            ..Self::of_type(INTENT_REQUEST)
        }
    }

    /// Returns the intent name, when this is an intent request.
    pub fn intent_name(&self) -> Option<&str> {
        self.intent.as_ref().map(|i| i.name.as_str())
    }
}

/// A recognized intent with its slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl Intent {
    /// Creates an intent without slots.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: HashMap::new(),
        }
    }

    /// Adds a slot with a recognized value.
    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.slots.insert(
            name.clone(),
            Slot {
                name,
                value: Some(value.into()),
            },
        );
        self
    }

    /// Recognized value of a slot, if the slot exists and was filled.
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots.get(name).and_then(|s| s.value.as_deref())
    }
}

/// A named value extracted from the utterance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// Error details attached to a `SessionEndedRequest`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestError {
    #[serde(rename = "type")]
    pub error_type: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Request type tags.
pub const LAUNCH_REQUEST: &str = "LaunchRequest";
pub const INTENT_REQUEST: &str = "IntentRequest";
pub const SESSION_ENDED_REQUEST: &str = "SessionEndedRequest";

fn default_version() -> String {
    "1.0".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_intent_request() {
        let body = json!({
            "version": "1.0",
            "session": {
                "new": false,
                "sessionId": "amzn1.echo-api.session.1",
                "application": {"applicationId": "amzn1.ask.skill.1"},
                "attributes": {"context": []},
                "user": {"userId": "amzn1.ask.account.1"}
            },
            "context": {"System": {}},
            "request": {
                "type": "IntentRequest",
                "requestId": "amzn1.echo-api.request.1",
                "timestamp": "2023-07-25T08:00:00Z",
                "locale": "en-US",
                "intent": {
                    "name": "GptQueryIntent",
                    "confirmationStatus": "NONE",
                    "slots": {
                        "query": {"name": "query", "value": "What is 2+2?", "confirmationStatus": "NONE"}
                    }
                }
            }
        });

        let envelope: RequestEnvelope = serde_json::from_value(body).unwrap();

        assert_eq!(envelope.request.request_type, INTENT_REQUEST);
        assert_eq!(envelope.request.intent_name(), Some("GptQueryIntent"));
        let intent = envelope.request.intent.unwrap();
        assert_eq!(intent.slot_value("query"), Some("What is 2+2?"));
        let session = envelope.session.unwrap();
        assert_eq!(session.session_id, "amzn1.echo-api.session.1");
        assert!(session.attributes.unwrap().contains_key("context"));
    }

    #[test]
    fn unfilled_slot_has_no_value() {
        let body = json!({
            "request": {
                "type": "IntentRequest",
                "intent": {"name": "GptQueryIntent", "slots": {"query": {"name": "query"}}}
            }
        });

        let envelope: RequestEnvelope = serde_json::from_value(body).unwrap();

        assert_eq!(envelope.version, "1.0");
        assert!(envelope.session.is_none());
        assert_eq!(envelope.request.intent.unwrap().slot_value("query"), None);
    }

    #[test]
    fn deserializes_session_ended_with_error() {
        let body = json!({
            "request": {
                "type": "SessionEndedRequest",
                "reason": "ERROR",
                "error": {"type": "INVALID_RESPONSE", "message": "bad ssml"}
            }
        });

        let envelope: RequestEnvelope = serde_json::from_value(body).unwrap();

        assert_eq!(envelope.request.reason.as_deref(), Some("ERROR"));
        assert_eq!(envelope.request.error.unwrap().error_type, "INVALID_RESPONSE");
    }
}
