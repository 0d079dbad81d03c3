//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types shared by the skill
//! and conversation modules.

mod errors;
mod query;

pub use errors::ValidationError;
pub use query::UserQuery;
