//! Ticket-update action service.
//!
//! Field updates and assignments go straight to the update tool. Status
//! changes run a two-step resolution instead: fetch the transitions the
//! issue currently offers, match the requested status name against them,
//! then fire the matched transition.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::debug;

use crate::domain::models::{ActionReport, InputKind, UpdateParams, UpdateType};
use crate::domain::ports::ChatClient;
use crate::services::extraction;
use crate::services::jira_facade::JiraFacade;
use crate::services::prompts;

const PARSE_ERROR: &str = "Could not parse update parameters from request";
const MISSING_KEY_ERROR: &str = "Missing required field: issue_key is required";

pub struct UpdateService {
    chat: Arc<dyn ChatClient>,
    jira: Arc<JiraFacade>,
}

impl UpdateService {
    pub fn new(chat: Arc<dyn ChatClient>, jira: Arc<JiraFacade>) -> Self {
        Self { chat, jira }
    }

    /// Interpret a free-text update request and apply it.
    pub async fn update_ticket(&self, request: &str) -> ActionReport {
        let prompt = prompts::update_interpretation(request);
        let reply = match self.chat.complete(&prompt).await {
            Ok(reply) => reply,
            Err(err) => {
                return ActionReport::failed(
                    InputKind::Request,
                    request,
                    format!("Failed to update ticket: {err}"),
                )
            }
        };

        let params = match extraction::extract::<UpdateParams>(&reply) {
            Ok(params) => params,
            Err(err) => {
                debug!(%err, "update interpretation was not parseable");
                return ActionReport::failed(InputKind::Request, request, PARSE_ERROR);
            }
        };

        let Some(issue_key) = params.issue_key.clone() else {
            return ActionReport::failed(InputKind::Request, request, MISSING_KEY_ERROR);
        };

        let answer = match params.update_type.unwrap_or(UpdateType::FieldUpdate) {
            UpdateType::StatusChange => self.change_status(&issue_key, &params).await,
            UpdateType::Assign | UpdateType::FieldUpdate | UpdateType::Other => {
                self.jira.update_issue(&params).await
            }
        };

        ActionReport::answered(InputKind::Request, request, reply, answer)
    }

    /// Resolve the requested status name against the issue's available
    /// transitions, then execute the matching one.
    async fn change_status(&self, issue_key: &str, params: &UpdateParams) -> Value {
        let transitions_result = self.jira.get_transitions(issue_key).await;
        if transitions_result.get("error").is_some() {
            return transitions_result;
        }

        let transitions = transitions_result
            .get("transitions")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        // A missing target status matches nothing and takes the same
        // enumerating-error path as a wrong one.
        let target_status = params.status.as_deref().unwrap_or("");

        let matched = transitions.iter().find(|transition| {
            transition
                .pointer("/to/name")
                .and_then(Value::as_str)
                .is_some_and(|name| name.eq_ignore_ascii_case(target_status))
        });

        let Some(transition) = matched else {
            let available: Vec<&str> = transitions
                .iter()
                .filter_map(|transition| transition.pointer("/to/name").and_then(Value::as_str))
                .collect();
            return json!({
                "error": format!(
                    "Cannot transition to '{target_status}'. Available transitions: {}",
                    available.join(", ")
                ),
                "available_transitions": transitions,
            });
        };

        let transition_id = transition.get("id").cloned().unwrap_or(Value::Null);
        self.jira
            .transition_issue(issue_key, &transition_id, None, params.comment.as_deref())
            .await
    }
}
