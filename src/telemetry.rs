//! Tracing subscriber setup shared by the binaries.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ServerConfig;

/// Output format of the installed subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

impl LogFormat {
    /// JSON lines in production, human-readable text elsewhere.
    pub fn for_server(config: &ServerConfig) -> Self {
        if config.is_production() {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Builds the filter: `RUST_LOG` wins, otherwise the configured directive.
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber.
///
/// Only the first call installs anything; later calls return an error that
/// callers may ignore.
pub fn init_tracing(
    config: &ServerConfig,
    format: LogFormat,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = env_filter(&config.log_level);
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .try_init(),
        LogFormat::Text => registry.with(fmt::layer().with_target(true)).try_init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    #[test]
    fn production_logs_json() {
        let config = ServerConfig {
            environment: Environment::Production,
            ..Default::default()
        };
        assert_eq!(LogFormat::for_server(&config), LogFormat::Json);
        assert_eq!(LogFormat::for_server(&ServerConfig::default()), LogFormat::Text);
    }

    #[test]
    fn bad_directive_falls_back() {
        // Must not panic on garbage.
        let _ = env_filter("alexa_gpt=notalevel[");
    }
}
