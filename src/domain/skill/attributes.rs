//! Session attributes: per-session key-value state echoed by the platform.

use serde_json::{Map, Value};

use crate::domain::conversation::ContextMessage;
use crate::domain::foundation::ValidationError;

/// Attribute key holding the prior exchange.
pub const CONTEXT_KEY: &str = "context";

/// Mutable view over the attributes of one request.
///
/// Starts from whatever the platform sent and is written back into the
/// response envelope, so changes live exactly as long as the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionAttributes {
    values: Map<String, Value>,
}

impl SessionAttributes {
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Reads the stored context.
    ///
    /// A missing or `null` attribute is no context. Anything that is not a
    /// list of `{role, content}` pairs is a format error.
    pub fn context(&self) -> Result<Option<Vec<ContextMessage>>, ValidationError> {
        match self.values.get(CONTEXT_KEY) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| ValidationError::invalid_format(CONTEXT_KEY, e.to_string())),
        }
    }

    /// Replaces the stored context.
    pub fn set_context(&mut self, context: &[ContextMessage]) {
        let value = Value::Array(
            context
                .iter()
                .map(|m| {
                    serde_json::json!({
                        "role": m.role,
                        "content": m.content,
                    })
                })
                .collect(),
        );
        self.values.insert(CONTEXT_KEY.to_string(), value);
    }

    /// Drops the stored context.
    pub fn clear_context(&mut self) {
        self.values.remove(CONTEXT_KEY);
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attributes(value: Value) -> SessionAttributes {
        match value {
            Value::Object(map) => SessionAttributes::new(map),
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn missing_context_is_none() {
        assert_eq!(SessionAttributes::default().context().unwrap(), None);
        assert_eq!(attributes(json!({"context": null})).context().unwrap(), None);
    }

    #[test]
    fn reads_stored_pairs() {
        let attrs = attributes(json!({
            "context": [
                {"role": "user", "content": "hi"},
                {"role": "assistant", "content": "hello"}
            ]
        }));

        assert_eq!(
            attrs.context().unwrap(),
            Some(ContextMessage::exchange("hi", "hello"))
        );
    }

    #[test]
    fn malformed_context_is_a_format_error() {
        let attrs = attributes(json!({"context": "not a list"}));
        assert!(matches!(
            attrs.context(),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn set_context_writes_role_content_pairs() {
        let mut attrs = SessionAttributes::default();
        attrs.set_context(&ContextMessage::exchange("q", "a"));

        assert_eq!(
            attrs.into_map().get(CONTEXT_KEY),
            Some(&json!([
                {"role": "user", "content": "q"},
                {"role": "assistant", "content": "a"}
            ]))
        );
    }

    #[test]
    fn clear_context_keeps_other_attributes() {
        let mut attrs = attributes(json!({"context": [], "visits": 2}));
        attrs.clear_context();
        assert!(attrs.get(CONTEXT_KEY).is_none());
        assert_eq!(attrs.get("visits"), Some(&json!(2)));
    }
}
