//! HTTP adapters - the skill endpoint.

pub mod skill;

pub use skill::{skill_router, SkillAppState};
