//! Question Client Adapters.
//!
//! - `FormQuestionClient` - posts the question as a form field over HTTP

mod form_client;

pub use form_client::FormQuestionClient;
