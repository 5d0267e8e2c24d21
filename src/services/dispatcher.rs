//! Single entry point of the interpretation pipeline.

use std::sync::Arc;

use tracing::info;

use crate::domain::models::{DispatchEnvelope, Intent};
use crate::domain::ports::{ChatClient, ToolClient};
use crate::services::creation_service::CreationService;
use crate::services::intent_classifier::IntentClassifier;
use crate::services::jira_facade::JiraFacade;
use crate::services::query_service::QueryService;
use crate::services::update_service::UpdateService;

/// Classifies each request once and routes it to exactly one action
/// service. Whatever happens downstream, the caller gets a well-formed
/// envelope back: the action services render their own failures as data,
/// and an undecidable intent becomes a guidance envelope.
pub struct Dispatcher {
    classifier: IntentClassifier,
    query: QueryService,
    creation: CreationService,
    update: UpdateService,
}

impl Dispatcher {
    /// Wire the full pipeline from its two outbound ports. The tool
    /// session behind `tools` is shared by all three services.
    pub fn new(chat: Arc<dyn ChatClient>, tools: Arc<dyn ToolClient>) -> Self {
        let jira = Arc::new(JiraFacade::new(tools));
        Self {
            classifier: IntentClassifier::new(chat.clone()),
            query: QueryService::new(chat.clone(), jira.clone()),
            creation: CreationService::new(chat.clone(), jira.clone()),
            update: UpdateService::new(chat, jira),
        }
    }

    /// Process one natural-language request end to end.
    pub async fn process(&self, user_input: &str) -> DispatchEnvelope {
        let intent = self.classifier.classify(user_input).await;
        info!(%intent, "dispatching request");

        match intent {
            Intent::Query => DispatchEnvelope::routed(
                user_input,
                intent,
                self.query.query_tickets(user_input).await,
            ),
            Intent::Create => DispatchEnvelope::routed(
                user_input,
                intent,
                self.creation.create_ticket(user_input).await,
            ),
            Intent::Update => DispatchEnvelope::routed(
                user_input,
                intent,
                self.update.update_ticket(user_input).await,
            ),
            Intent::Unknown => DispatchEnvelope::unknown(user_input),
        }
    }
}
