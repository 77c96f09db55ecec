//! GenUI LLM - completion service adapter
//!
//! One operation: send a system instruction plus a user message to a
//! text-completion endpoint and get raw text back.
//!
//! - [`CompletionService`]: the seam agents call through
//! - [`GeminiClient`]: HTTP implementation against the Gemini `generateContent` API
//! - [`CompletionConfig`]: model, endpoint, credential and sampling settings
//! - [`CompletionError`]: configuration / service / malformed-response failures
//!
//! The adapter never retries. Retry policy, if any, belongs to the caller.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod gemini;
pub mod service;

pub use config::{CompletionConfig, SamplingConfig, API_KEY_ENV, ENDPOINT_ENV, MODEL_ENV};
pub use error::CompletionError;
pub use gemini::GeminiClient;
pub use service::CompletionService;

#[cfg(any(test, feature = "mock"))]
pub use service::MockCompletionService;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
