//! Settings for the skill server and the two terminal tools.
//!
//! Everything comes from the process environment (after an optional `.env`
//! file). Keys carry the `ALEXA_GPT` prefix and nest with `__`:
//!
//! ```text
//! ALEXA_GPT__SERVER__PORT=8080
//! ALEXA_GPT__AI__OPENAI_API_KEY=sk-...
//! ALEXA_GPT__QUERY__DELAY_SECS=10
//! ```
//!
//! ```no_run
//! use alexa_gpt::config::AppConfig;
//!
//! let config = AppConfig::load().expect("config");
//! config.validate().expect("valid config");
//! ```

mod ai;
mod error;
mod query;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use query::QueryConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

const ENV_PREFIX: &str = "ALEXA_GPT";
const ENV_SEPARATOR: &str = "__";

/// All sections. Each one falls back to its defaults, so an empty
/// environment is a working development setup minus the API key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub ai: AiConfig,

    /// Used by the `ask` binary only
    #[serde(default)]
    pub query: QueryConfig,
}

impl AppConfig {
    /// Reads `.env` if present, then `ALEXA_GPT__*` variables.
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env is normal outside development.
        let _ = dotenvy::dotenv();

        let source = config::Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR);
        let config = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Checks every section; the API key is only mandatory in production.
    ///
    /// The completion call must time out before the whole request does, so a
    /// slow endpoint is still answered with speech.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate(self.is_production())?;
        if self.ai.timeout_secs >= self.server.request_timeout_secs {
            return Err(ValidationError::CompletionTimeoutTooLong);
        }
        self.query.validate()
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
