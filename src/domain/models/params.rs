//! Typed interpreted parameters, one struct per intent.
//!
//! These are the schemas the interpretation prompts document to the model.
//! Parsing is strict (`deny_unknown_fields`): a reply that drifts from the
//! documented schema fails with a typed error instead of passing unknown
//! keys through to the backend. Each action service decides what to do with
//! that failure (default search for queries, explicit error otherwise).

use serde::Deserialize;
use serde_json::Value;

/// Sentinel the prompts use for "assigned to me" filters.
pub const CURRENT_USER: &str = "currentUser()";

/// Which query operation the model selected.
///
/// The prompt also documents `get_user_profile`; that and anything else
/// unrecognized collapses into `Other`, which executes as a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryAction {
    SearchIssues,
    GetIssue,
    GetProjects,
    #[serde(other)]
    Other,
}

/// Parameters extracted from a ticket query.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryParams {
    pub action: Option<QueryAction>,
    pub jql: Option<String>,
    pub issue_key: Option<String>,
    pub project_key: Option<String>,
    pub assignee: Option<String>,
    pub status: Option<String>,
    pub issue_type: Option<String>,
    pub limit: Option<u32>,
}

impl QueryParams {
    /// The canned search used when the model's reply cannot be parsed:
    /// open tickets assigned to the current user.
    pub fn default_search() -> Self {
        Self {
            action: Some(QueryAction::SearchIssues),
            jql: Some(format!("assignee = {CURRENT_USER} AND status != Done")),
            limit: Some(50),
            ..Self::default()
        }
    }
}

/// Parameters extracted from a ticket creation request.
///
/// `priority` is part of the documented schema but is not forwarded to the
/// backend; the create tool has no parameter for it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateParams {
    pub project_key: Option<String>,
    pub summary: Option<String>,
    pub issue_type: Option<String>,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub priority: Option<String>,
    pub components: Option<String>,
    pub additional_fields: Option<Value>,
}

impl CreateParams {
    /// True when every required creation field is present.
    pub fn has_required_fields(&self) -> bool {
        self.project_key.is_some() && self.summary.is_some() && self.issue_type.is_some()
    }
}

/// How an update request should be executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateType {
    FieldUpdate,
    StatusChange,
    Assign,
    #[serde(other)]
    Other,
}

/// Parameters extracted from a ticket update request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateParams {
    pub issue_key: Option<String>,
    pub update_type: Option<UpdateType>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub status: Option<String>,
    pub comment: Option<String>,
    pub additional_fields: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_action_unknown_value_collapses_to_other() {
        let params: QueryParams =
            serde_json::from_value(json!({ "action": "get_user_profile" })).unwrap();
        assert_eq!(params.action, Some(QueryAction::Other));
    }

    #[test]
    fn query_params_reject_unknown_keys() {
        let result: Result<QueryParams, _> =
            serde_json::from_value(json!({ "jql": "project = X", "sort": "created" }));
        assert!(result.is_err());
    }

    #[test]
    fn default_search_targets_open_current_user_tickets() {
        let params = QueryParams::default_search();
        assert_eq!(
            params.jql.as_deref(),
            Some("assignee = currentUser() AND status != Done")
        );
        assert_eq!(params.limit, Some(50));
        assert_eq!(params.action, Some(QueryAction::SearchIssues));
    }

    #[test]
    fn create_params_required_fields() {
        let complete: CreateParams = serde_json::from_value(json!({
            "project_key": "DEMO",
            "summary": "Login fails",
            "issue_type": "Bug"
        }))
        .unwrap();
        assert!(complete.has_required_fields());

        let missing_type: CreateParams = serde_json::from_value(json!({
            "project_key": "DEMO",
            "summary": "Login fails"
        }))
        .unwrap();
        assert!(!missing_type.has_required_fields());
    }

    #[test]
    fn update_type_parses_documented_values() {
        let params: UpdateParams = serde_json::from_value(json!({
            "issue_key": "ABC-123",
            "update_type": "status_change",
            "status": "In Progress"
        }))
        .unwrap();
        assert_eq!(params.update_type, Some(UpdateType::StatusChange));
    }

    #[test]
    fn update_type_unrecognized_value_collapses_to_other() {
        let params: UpdateParams = serde_json::from_value(json!({
            "issue_key": "ABC-123",
            "update_type": "rename"
        }))
        .unwrap();
        assert_eq!(params.update_type, Some(UpdateType::Other));
    }
}
