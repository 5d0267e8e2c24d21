//! Common test utilities for integration tests
//!
//! Scripted fakes for the two outbound ports, shared across the
//! integration test files.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use ticketeer::domain::ports::{ChatClient, ChatError, ToolClient, ToolDescriptor, ToolError};

/// Chat client replaying scripted outcomes in call order.
///
/// The first `complete` call is the classifier's; the second is the
/// interpretation call of whichever service the dispatcher picked.
pub struct ScriptedChat {
    replies: Mutex<VecDeque<Result<String, ChatError>>>,
}

impl ScriptedChat {
    pub fn new(replies: Vec<Result<String, ChatError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
        }
    }

    /// Script a sequence of successful replies.
    pub fn replying(replies: &[&str]) -> Self {
        Self::new(replies.iter().map(|reply| Ok((*reply).to_string())).collect())
    }
}

#[async_trait]
impl ChatClient for ScriptedChat {
    async fn complete(&self, _prompt: &str) -> Result<String, ChatError> {
        self.replies
            .lock()
            .expect("scripted chat lock")
            .pop_front()
            .unwrap_or_else(|| Err(ChatError::Transport("no scripted reply left".to_string())))
    }
}

/// Chat client that always fails, driving the deterministic fallbacks.
pub struct OfflineChat;

#[async_trait]
impl ChatClient for OfflineChat {
    async fn complete(&self, _prompt: &str) -> Result<String, ChatError> {
        Err(ChatError::Transport("model unavailable".to_string()))
    }
}

/// Tool client that records every call and replays scripted payloads.
///
/// With no scripted result left, calls succeed with an empty JSON object,
/// which keeps happy-path tests short.
pub struct RecordingTools {
    calls: Mutex<Vec<(String, Value)>>,
    results: Mutex<VecDeque<Result<String, ToolError>>>,
}

impl RecordingTools {
    pub fn new() -> Self {
        Self::with_results(Vec::new())
    }

    pub fn with_results(results: Vec<Result<String, ToolError>>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            results: Mutex::new(results.into()),
        }
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().expect("recording tools lock").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("recording tools lock").len()
    }
}

impl Default for RecordingTools {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolClient for RecordingTools {
    async fn call_tool(&self, tool: &str, arguments: Value) -> Result<String, ToolError> {
        self.calls
            .lock()
            .expect("recording tools lock")
            .push((tool.to_string(), arguments));
        self.results
            .lock()
            .expect("recording tools lock")
            .pop_front()
            .unwrap_or_else(|| Ok("{}".to_string()))
    }

    async fn list_tools(&self) -> Result<Vec<ToolDescriptor>, ToolError> {
        Ok(vec![ToolDescriptor {
            name: "jira_search".to_string(),
            description: Some("Search Jira issues with JQL".to_string()),
        }])
    }
}
