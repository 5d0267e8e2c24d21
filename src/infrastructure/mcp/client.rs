//! HTTP MCP client
//!
//! `ToolClient` adapter that reaches the Jira MCP server over HTTP with
//! JSON-RPC 2.0 (`tools/call`, `tools/list`). The reqwest client and its
//! connection pool live for the whole process and are shared by every
//! concurrent dispatch; the server handles multiplexing.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde_json::{json, Value};
use tracing::debug;

use crate::domain::models::McpConfig;
use crate::domain::ports::{ToolClient, ToolDescriptor, ToolError};

use super::types::{JsonRpcRequest, JsonRpcResponse, ToolCallResult, ToolListResult};

pub struct McpHttpClient {
    http_client: ReqwestClient,
    url: String,
}

impl McpHttpClient {
    pub fn new(config: &McpConfig) -> Result<Self> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client for the MCP endpoint")?;

        Ok(Self {
            http_client,
            url: config.url.clone(),
        })
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value, ToolError> {
        let request = JsonRpcRequest::new(method, params);

        let response = self
            .http_client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|err| ToolError::Connection(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::Connection(format!(
                "MCP endpoint returned HTTP {status}"
            )));
        }

        let rpc: JsonRpcResponse = response
            .json()
            .await
            .map_err(|err| ToolError::Malformed(err.to_string()))?;

        if let Some(error) = rpc.error {
            return Err(ToolError::Rpc(format!(
                "JSON-RPC error {}: {}",
                error.code, error.message
            )));
        }

        rpc.result
            .ok_or_else(|| ToolError::Malformed("response carried neither result nor error".to_string()))
    }
}

#[async_trait]
impl ToolClient for McpHttpClient {
    async fn call_tool(&self, tool: &str, arguments: Value) -> Result<String, ToolError> {
        debug!(tool, "calling MCP tool");

        let result = self
            .request("tools/call", json!({ "name": tool, "arguments": arguments }))
            .await?;

        let call: ToolCallResult = serde_json::from_value(result)
            .map_err(|err| ToolError::Malformed(err.to_string()))?;

        let text = call
            .content
            .iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text.clone())
            .ok_or_else(|| ToolError::Malformed("tool result contained no text content".to_string()))?;

        if call.is_error {
            return Err(ToolError::Execution(text));
        }

        Ok(text)
    }

    async fn list_tools(&self) -> Result<Vec<ToolDescriptor>, ToolError> {
        let result = self.request("tools/list", json!({})).await?;

        let listing: ToolListResult = serde_json::from_value(result)
            .map_err(|err| ToolError::Malformed(err.to_string()))?;

        Ok(listing
            .tools
            .into_iter()
            .map(|entry| ToolDescriptor {
                name: entry.name,
                description: entry.description,
            })
            .collect())
    }
}
