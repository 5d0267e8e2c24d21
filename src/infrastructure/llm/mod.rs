//! Outbound adapter for the chat-completion backend.

pub mod client;
pub mod error;
pub mod types;

pub use client::OpenAiChatClient;
pub use error::LlmApiError;
