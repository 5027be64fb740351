//! LLM client module
//!
//! A provider-neutral completion trait and the OpenRouter implementation.

pub mod client;
mod error;
mod openrouter;
mod types;

pub use client::LlmClient;
pub use error::LlmError;
pub use openrouter::OpenRouterClient;
pub use types::{CompletionRequest, CompletionResponse, Message, Role, TokenUsage};
