//! Application layer - handlers that orchestrate domain operations.
//!
//! Handlers coordinate between the domain and the ports; adapters are
//! injected by the binaries.

pub mod handlers;

pub use handlers::chat::ChatSession;
pub use handlers::completion::{error_reply, CompletionBridge, GenerationSettings};
pub use handlers::query::AskQuestionHandler;
pub use handlers::skill::{standard_skill, Skill, SkillBuildError, SkillBuilder, SkillError};
