//! Wiring shared by the binaries.

use std::sync::Arc;

use thiserror::Error;

use crate::adapters::ai::{OpenAIConfig, OpenAIProvider};
use crate::application::handlers::completion::{CompletionBridge, GenerationSettings};
use crate::application::handlers::skill::SkillBuildError;
use crate::config::{AiConfig, ConfigError, ValidationError};
use crate::ports::{CompletionError, QueryError};

/// Anything that stops a binary before or while it serves.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("completion provider: {0}")]
    Provider(#[from] CompletionError),

    #[error("skill registration: {0}")]
    Skill(#[from] SkillBuildError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Builds the completion bridge over the OpenAI-compatible endpoint.
pub fn completion_bridge(config: &AiConfig) -> Result<CompletionBridge, StartupError> {
    if !config.has_openai() {
        tracing::warn!("no completion API key configured; every query will report an error");
    }

    let provider = OpenAIProvider::new(OpenAIConfig::from(config))?;
    Ok(CompletionBridge::new(
        Arc::new(provider),
        GenerationSettings::from(config),
    ))
}
