//! Ticketeer - natural-language issue-tracker gateway
//!
//! Ticketeer turns free-text requests ("show me open tickets assigned to
//! me", "create a bug ticket ...") into structured operations against a
//! Jira backend reached exclusively through named MCP tools. A chat model
//! classifies each request and extracts per-intent parameters; deterministic
//! fallbacks keep the pipeline degrading gracefully when the model is
//! unavailable or non-compliant.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): data shapes and the two outbound port traits
//! - **Service Layer** (`services`): the interpretation pipeline
//! - **Infrastructure Layer** (`infrastructure`): chat/MCP adapters, config,
//!   logging, HTTP surface
//! - **CLI Layer** (`cli`): command-line interface

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    ActionReport, Config, DispatchEnvelope, InputKind, Intent, LlmConfig, LoggingConfig,
    McpConfig, ServerConfig,
};
pub use domain::ports::{ChatClient, ChatError, ToolClient, ToolDescriptor, ToolError};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::Dispatcher;
