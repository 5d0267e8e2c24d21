//! Facade over the remote Jira tools.
//!
//! Every operation marshals its arguments, invokes the named tool through
//! the shared session, and parses the textual payload as JSON. Failures of
//! any kind come back as `{"error": "<Operation> failed: <cause>"}` — this
//! boundary never returns an `Err` and never panics, so call sites always
//! hold a JSON mapping.

use std::sync::Arc;

use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use crate::domain::models::params::CURRENT_USER;
use crate::domain::models::{CreateParams, QueryParams, UpdateParams};
use crate::domain::ports::{ToolClient, ToolError};

/// Field projection sent with every search.
const SEARCH_FIELDS: &str = "summary,status,assignee,created,issuetype";
/// Field projection sent with every single-issue fetch.
const ISSUE_FIELDS: &str = "summary,status,assignee,description,created,updated";
/// Result cap applied when the interpretation does not name one.
const DEFAULT_SEARCH_LIMIT: u32 = 50;

pub struct JiraFacade {
    tools: Arc<dyn ToolClient>,
}

impl JiraFacade {
    pub fn new(tools: Arc<dyn ToolClient>) -> Self {
        Self { tools }
    }

    /// Search issues. Uses the interpreted JQL when present, otherwise a
    /// query synthesized from the structured filters.
    pub async fn search(&self, params: &QueryParams) -> Value {
        let jql = params
            .jql
            .clone()
            .unwrap_or_else(|| build_default_jql(params));
        let args = json!({
            "jql": jql,
            "fields": SEARCH_FIELDS,
            "limit": params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
        });
        self.invoke("Search", "jira_search", args).await
    }

    pub async fn get_issue(&self, issue_key: &str) -> Value {
        let args = json!({
            "issue_key": issue_key,
            "fields": ISSUE_FIELDS,
        });
        self.invoke("Get issue", "jira_get_issue", args).await
    }

    pub async fn get_projects(&self) -> Value {
        let args = json!({ "include_archived": false });
        self.invoke("Get projects", "jira_get_all_projects", args).await
    }

    /// Create an issue. Required fields are validated by the calling
    /// service; optional ones are sent only when present, never as nulls.
    pub async fn create_issue(&self, params: &CreateParams) -> Value {
        let mut args = Map::new();
        push_opt(&mut args, "project_key", params.project_key.as_deref());
        push_opt(&mut args, "summary", params.summary.as_deref());
        push_opt(&mut args, "issue_type", params.issue_type.as_deref());
        push_opt(&mut args, "description", params.description.as_deref());
        push_opt(&mut args, "assignee", params.assignee.as_deref());
        push_opt(&mut args, "components", params.components.as_deref());
        if let Some(extra) = &params.additional_fields {
            args.insert("additional_fields".to_string(), extra.clone());
        }
        self.invoke("Create issue", "jira_create_issue", Value::Object(args)).await
    }

    /// Update issue fields. The assignee is nested as `{"name": ...}` the
    /// way the backend expects it.
    pub async fn update_issue(&self, params: &UpdateParams) -> Value {
        let mut fields = Map::new();
        push_opt(&mut fields, "summary", params.summary.as_deref());
        push_opt(&mut fields, "description", params.description.as_deref());
        if let Some(assignee) = &params.assignee {
            fields.insert("assignee".to_string(), json!({ "name": assignee }));
        }

        let mut args = Map::new();
        push_opt(&mut args, "issue_key", params.issue_key.as_deref());
        args.insert("fields".to_string(), Value::Object(fields));
        if let Some(extra) = &params.additional_fields {
            args.insert("additional_fields".to_string(), extra.clone());
        }
        self.invoke("Update issue", "jira_update_issue", Value::Object(args)).await
    }

    pub async fn transition_issue(
        &self,
        issue_key: &str,
        transition_id: &Value,
        fields: Option<&Value>,
        comment: Option<&str>,
    ) -> Value {
        let mut args = Map::new();
        args.insert("issue_key".to_string(), Value::String(issue_key.to_string()));
        args.insert("transition_id".to_string(), transition_id.clone());
        if let Some(fields) = fields {
            args.insert("fields".to_string(), fields.clone());
        }
        push_opt(&mut args, "comment", comment);
        self.invoke("Transition issue", "jira_transition_issue", Value::Object(args)).await
    }

    pub async fn get_transitions(&self, issue_key: &str) -> Value {
        let args = json!({ "issue_key": issue_key });
        self.invoke("Get transitions", "jira_get_transitions", args).await
    }

    async fn invoke(&self, operation: &str, tool: &str, args: Value) -> Value {
        debug!(tool, "invoking remote tool");
        match self.try_invoke(tool, args).await {
            Ok(value) => value,
            Err(err) => {
                warn!(tool, %err, "remote tool call failed");
                json!({ "error": format!("{operation} failed: {err}") })
            }
        }
    }

    async fn try_invoke(&self, tool: &str, args: Value) -> Result<Value, ToolError> {
        let text = self.tools.call_tool(tool, args).await?;
        serde_json::from_str(&text).map_err(|err| ToolError::Malformed(err.to_string()))
    }
}

fn push_opt(map: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        map.insert(key.to_string(), Value::String(value.to_string()));
    }
}

/// Synthesize a JQL query from structured filters; with no filters, fall
/// back to a recency ordering.
pub fn build_default_jql(params: &QueryParams) -> String {
    let mut parts = Vec::new();

    if params.assignee.as_deref() == Some(CURRENT_USER) {
        parts.push(format!("assignee = {CURRENT_USER}"));
    }
    if params.status.as_deref() == Some("Open") {
        parts.push("status != Done".to_string());
    }
    if let Some(project_key) = &params.project_key {
        parts.push(format!("project = {project_key}"));
    }
    if let Some(issue_type) = &params.issue_type {
        parts.push(format!("issuetype = {issue_type}"));
    }

    if parts.is_empty() {
        "order by created DESC".to_string()
    } else {
        parts.join(" AND ")
    }
}
