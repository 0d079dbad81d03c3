//! Standalone question script configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Where the `ask` script posts its question and how long it waits.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    /// Endpoint receiving the `question` form field
    #[serde(default = "default_url")]
    pub url: String,

    /// Seconds to wait between posting and printing the answer
    #[serde(default = "default_delay")]
    pub delay_secs: u64,
}

impl QueryConfig {
    /// Get the print delay as Duration
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }

    /// Validate query configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ValidationError::InvalidUrl("query.url"));
        }
        Ok(())
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            delay_secs: default_delay(),
        }
    }
}

fn default_url() -> String {
    "https://chat.jinshutuan.com/#/chat/1690249865632".to_string()
}

fn default_delay() -> u64 {
    10
}
