//! Alexa GPT - a voice skill that answers spoken questions through a
//! text-completion API.
//!
//! Layout follows ports and adapters: `domain` holds the wire types and
//! conversation rules, `ports` the outbound seams, `adapters` their HTTP
//! implementations, and `application` the handlers that tie them together.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
