//! Outbound response returned to the voice platform.

use serde::{Deserialize, Serialize};

/// Top-level response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    /// Attributes the platform hands back with the next request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<serde_json::Map<String, serde_json::Value>>,
    pub response: SkillResponse,
}

impl ResponseEnvelope {
    /// Wraps a response, attaching attributes only when there are any.
    pub fn new(
        response: SkillResponse,
        session_attributes: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            version: "1.0".to_string(),
            session_attributes: if session_attributes.is_empty() {
                None
            } else {
                Some(session_attributes)
            },
            response,
        }
    }
}

/// Speech, optional re-prompt, and whether the session stays open.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

impl SkillResponse {
    /// Spoken text, if any.
    pub fn speech_text(&self) -> Option<&str> {
        self.output_speech.as_ref().map(|s| s.text.as_str())
    }

    /// Re-prompt text, if any.
    pub fn reprompt_text(&self) -> Option<&str> {
        self.reprompt.as_ref().map(|r| r.output_speech.text.as_str())
    }

    /// True unless the response explicitly ends the session.
    pub fn keeps_session_open(&self) -> bool {
        self.should_end_session != Some(true)
    }
}

/// Plain-text speech.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: String,
    pub text: String,
}

impl OutputSpeech {
    pub fn plain_text(text: impl Into<String>) -> Self {
        Self {
            speech_type: "PlainText".to_string(),
            text: text.into(),
        }
    }
}

/// Speech played when the user stays silent after a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

/// Fluent builder for [`SkillResponse`].
///
/// `ask` keeps the session open; `end_session` closes it. Calling neither
/// leaves the decision to the platform.
#[derive(Debug, Clone, Default)]
pub struct ResponseBuilder {
    response: SkillResponse,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the spoken text.
    pub fn speak(mut self, text: impl Into<String>) -> Self {
        self.response.output_speech = Some(OutputSpeech::plain_text(text));
        self
    }

    /// Sets the re-prompt and keeps the session open.
    pub fn ask(mut self, text: impl Into<String>) -> Self {
        self.response.reprompt = Some(Reprompt {
            output_speech: OutputSpeech::plain_text(text),
        });
        self.response.should_end_session = Some(false);
        self
    }

    /// Closes the session after speaking.
    pub fn end_session(mut self) -> Self {
        self.response.should_end_session = Some(true);
        self
    }

    pub fn build(self) -> SkillResponse {
        self.response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ask_keeps_session_open() {
        let response = ResponseBuilder::new().speak("hi").ask("still there?").build();
        assert_eq!(response.speech_text(), Some("hi"));
        assert_eq!(response.reprompt_text(), Some("still there?"));
        assert_eq!(response.should_end_session, Some(false));
        assert!(response.keeps_session_open());
    }

    #[test]
    fn end_session_closes_without_reprompt() {
        let response = ResponseBuilder::new().speak("bye").end_session().build();
        assert!(response.reprompt.is_none());
        assert!(!response.keeps_session_open());
    }

    #[test]
    fn serializes_platform_shape() {
        let response = ResponseBuilder::new().speak("hi").ask("again").build();
        let envelope = ResponseEnvelope::new(response, serde_json::Map::new());

        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            value,
            json!({
                "version": "1.0",
                "response": {
                    "outputSpeech": {"type": "PlainText", "text": "hi"},
                    "reprompt": {"outputSpeech": {"type": "PlainText", "text": "again"}},
                    "shouldEndSession": false
                }
            })
        );
    }

    #[test]
    fn empty_response_serializes_to_empty_object() {
        let value = serde_json::to_value(SkillResponse::default()).unwrap();
        assert_eq!(value, json!({}));
    }
}
