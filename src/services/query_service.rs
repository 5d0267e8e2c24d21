//! Ticket-query action service.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::debug;

use crate::domain::models::{ActionReport, InputKind, QueryAction, QueryParams};
use crate::domain::ports::{ChatClient, ChatError};
use crate::services::extraction;
use crate::services::jira_facade::JiraFacade;
use crate::services::prompts;

pub struct QueryService {
    chat: Arc<dyn ChatClient>,
    jira: Arc<JiraFacade>,
}

impl QueryService {
    pub fn new(chat: Arc<dyn ChatClient>, jira: Arc<JiraFacade>) -> Self {
        Self { chat, jira }
    }

    /// Interpret a free-text question and execute the matching lookup.
    ///
    /// An unparseable interpretation silently becomes the default search
    /// (open tickets assigned to the current user); only a failure to reach
    /// the model at all surfaces as an error envelope.
    pub async fn query_tickets(&self, question: &str) -> ActionReport {
        match self.interpret_and_execute(question).await {
            Ok((interpretation, answer)) => {
                ActionReport::answered(InputKind::Question, question, interpretation, answer)
            }
            Err(err) => ActionReport::failed(
                InputKind::Question,
                question,
                format!("Failed to process query: {err}"),
            ),
        }
    }

    async fn interpret_and_execute(&self, question: &str) -> Result<(String, Value), ChatError> {
        let prompt = prompts::query_interpretation(question);
        let reply = self.chat.complete(&prompt).await?;

        let params = match extraction::extract::<QueryParams>(&reply) {
            Ok(params) => params,
            Err(err) => {
                debug!(%err, "query interpretation was not parseable, using default search");
                QueryParams::default_search()
            }
        };

        let answer = self.execute(&params).await;
        Ok((reply, answer))
    }

    async fn execute(&self, params: &QueryParams) -> Value {
        match params.action.unwrap_or(QueryAction::SearchIssues) {
            QueryAction::GetIssue => match params.issue_key.as_deref() {
                Some(issue_key) => self.jira.get_issue(issue_key).await,
                None => json!({ "error": "Get issue failed: interpretation did not include an issue key" }),
            },
            QueryAction::GetProjects => self.jira.get_projects().await,
            QueryAction::SearchIssues | QueryAction::Other => self.jira.search(params).await,
        }
    }
}
