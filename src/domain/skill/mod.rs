//! Skill domain module.
//!
//! Wire types exchanged with the voice platform, the closed set of intents
//! the skill understands, and the session attributes carried between turns.

mod attributes;
mod envelope;
mod intent;
mod response;

pub use attributes::{SessionAttributes, CONTEXT_KEY};
pub use envelope::{
    Application, Intent, RequestEnvelope, RequestError, Session, SkillRequest, Slot, User,
    INTENT_REQUEST, LAUNCH_REQUEST, SESSION_ENDED_REQUEST,
};
pub use intent::{
    IntentKind, SkillIntent, CANCEL_INTENT, GPT_QUERY_INTENT, QUERY_SLOT, STOP_INTENT,
};
pub use response::{OutputSpeech, Reprompt, ResponseBuilder, ResponseEnvelope, SkillResponse};
