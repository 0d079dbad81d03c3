//! Voice skill handlers and the dispatcher that routes requests to them.

mod cancel_stop;
mod catch_all;
mod dispatcher;
mod gpt_query;
mod handler;
mod launch;
mod session_ended;

pub use cancel_stop::{CancelOrStopIntentHandler, FAREWELL};
pub use catch_all::{CatchAllExceptionHandler, APOLOGY};
pub use dispatcher::{standard_skill, Skill, SkillBuildError, SkillBuilder};
pub use gpt_query::{GptQueryIntentHandler, FOLLOW_UP_PROMPT, MISSING_QUERY_REPLY};
pub use handler::{ExceptionHandler, HandlerInput, RequestHandler, SkillError};
pub use launch::{LaunchRequestHandler, LAUNCH_GREETING};
pub use session_ended::SessionEndedRequestHandler;
