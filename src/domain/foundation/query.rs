//! UserQuery value object.

use std::fmt;

use super::errors::ValidationError;

/// Free text the user asked, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserQuery(String);

impl UserQuery {
    /// Creates a query from raw recognized text.
    pub fn new(text: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("query"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
