//! Port trait definitions (Hexagonal Architecture)
//!
//! Async trait interfaces that infrastructure adapters implement:
//! - `ChatClient`: chat-completion backend used for classification and
//!   interpretation
//! - `ToolClient`: remote tool-invocation session backing the Jira facade
//!
//! The service layer depends only on these traits, so both network
//! collaborators can be swapped for scripted fakes in tests.

pub mod chat_client;
pub mod tool_client;

pub use chat_client::{ChatClient, ChatError};
pub use tool_client::{ToolClient, ToolDescriptor, ToolError};
