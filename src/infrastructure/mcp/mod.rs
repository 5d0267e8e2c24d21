//! MCP (Model Context Protocol) infrastructure module
//!
//! HTTP JSON-RPC client for the remote tool session the Jira facade uses.

pub mod client;
pub mod types;

pub use client::McpHttpClient;
