//! Ticket-creation action service.
//!
//! Unlike queries, creation has no interpretation fallback: a reply that
//! cannot be parsed, or one missing a required field, stops the pipeline
//! before any remote call. Guessing at a write would create the wrong
//! ticket, not a default one.

use std::sync::Arc;

use tracing::debug;

use crate::domain::models::{ActionReport, CreateParams, InputKind};
use crate::domain::ports::ChatClient;
use crate::services::extraction;
use crate::services::jira_facade::JiraFacade;
use crate::services::prompts;

const PARSE_ERROR: &str = "Could not parse creation parameters from request";
const MISSING_FIELDS_ERROR: &str =
    "Missing required fields: project_key, summary, and issue_type are required";

pub struct CreationService {
    chat: Arc<dyn ChatClient>,
    jira: Arc<JiraFacade>,
}

impl CreationService {
    pub fn new(chat: Arc<dyn ChatClient>, jira: Arc<JiraFacade>) -> Self {
        Self { chat, jira }
    }

    /// Interpret a free-text creation request and create the issue.
    pub async fn create_ticket(&self, request: &str) -> ActionReport {
        let prompt = prompts::creation_interpretation(request);
        let reply = match self.chat.complete(&prompt).await {
            Ok(reply) => reply,
            Err(err) => {
                return ActionReport::failed(
                    InputKind::Request,
                    request,
                    format!("Failed to create ticket: {err}"),
                )
            }
        };

        let params = match extraction::extract::<CreateParams>(&reply) {
            Ok(params) => params,
            Err(err) => {
                debug!(%err, "creation interpretation was not parseable");
                return ActionReport::failed(InputKind::Request, request, PARSE_ERROR);
            }
        };

        if !params.has_required_fields() {
            return ActionReport::failed(InputKind::Request, request, MISSING_FIELDS_ERROR);
        }

        let answer = self.jira.create_issue(&params).await;
        ActionReport::answered(InputKind::Request, request, reply, answer)
    }
}
