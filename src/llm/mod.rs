//! Hosted-model completion transport.
//!
//! A provider-agnostic [`TextCompletion`] trait plus the HTTP-backed
//! [`GeminiProvider`] the planner uses by default.

pub mod gemini;
pub mod provider;
pub mod types;

pub use gemini::GeminiProvider;
pub use provider::TextCompletion;
pub use types::*;
