//! HTTP adapter for the voice skill endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, HealthResponse};
pub use handlers::{handle_skill_request, health, SkillApiError, SkillAppState};
pub use routes::skill_router;
