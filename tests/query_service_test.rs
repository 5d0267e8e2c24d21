//! Integration tests for the query action service.

mod common;

use std::sync::Arc;

use common::{OfflineChat, RecordingTools, ScriptedChat};
use serde_json::Value;
use ticketeer::services::{JiraFacade, QueryService};

fn service(
    chat: Arc<dyn ticketeer::ChatClient>,
    tools: Arc<RecordingTools>,
) -> QueryService {
    QueryService::new(chat, Arc::new(JiraFacade::new(tools)))
}

#[tokio::test]
async fn interpreted_jql_is_sent_verbatim() {
    let chat = Arc::new(ScriptedChat::replying(&[
        r#"{"action": "search_issues", "jql": "assignee = currentUser() AND status != Done", "limit": 20}"#,
    ]));
    let tools = Arc::new(RecordingTools::new());

    let report = service(chat, tools.clone())
        .query_tickets("open tickets assigned to me")
        .await;

    assert!(!report.is_error());
    let calls = tools.calls();
    assert_eq!(calls[0].0, "jira_search");
    assert_eq!(calls[0].1["jql"], "assignee = currentUser() AND status != Done");
    assert_eq!(calls[0].1["limit"], 20);
    assert_eq!(calls[0].1["fields"], "summary,status,assignee,created,issuetype");
}

#[tokio::test]
async fn fenced_reply_is_stripped_before_parsing() {
    let chat = Arc::new(ScriptedChat::replying(&[
        "```json\n{\"action\": \"search_issues\", \"jql\": \"project = X\"}\n```",
    ]));
    let tools = Arc::new(RecordingTools::new());

    let report = service(chat, tools.clone()).query_tickets("tickets in X").await;

    assert!(!report.is_error());
    assert_eq!(tools.calls()[0].1["jql"], "project = X");
}

#[tokio::test]
async fn unparseable_reply_falls_back_to_default_search() {
    let chat = Arc::new(ScriptedChat::replying(&[
        "Sorry, I cannot produce JSON today.",
    ]));
    let tools = Arc::new(RecordingTools::new());

    let report = service(chat, tools.clone())
        .query_tickets("whatever you can find")
        .await;

    assert!(!report.is_error());
    let calls = tools.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1["jql"], "assignee = currentUser() AND status != Done");
    assert_eq!(calls[0].1["limit"], 50);
}

#[tokio::test]
async fn get_issue_action_routes_to_issue_fetch() {
    let chat = Arc::new(ScriptedChat::replying(&[
        r#"{"action": "get_issue", "issue_key": "KAN-7"}"#,
    ]));
    let tools = Arc::new(RecordingTools::new());

    let report = service(chat, tools.clone()).query_tickets("what is KAN-7 about").await;

    assert!(!report.is_error());
    let calls = tools.calls();
    assert_eq!(calls[0].0, "jira_get_issue");
    assert_eq!(calls[0].1["issue_key"], "KAN-7");
    assert_eq!(
        calls[0].1["fields"],
        "summary,status,assignee,description,created,updated"
    );
}

#[tokio::test]
async fn get_issue_without_key_reports_error_without_remote_call() {
    let chat = Arc::new(ScriptedChat::replying(&[r#"{"action": "get_issue"}"#]));
    let tools = Arc::new(RecordingTools::new());

    let report = service(chat, tools.clone()).query_tickets("show me the issue").await;

    // The report itself is answered; the answer is an error mapping.
    assert!(!report.is_error());
    let answer = report.answer().unwrap();
    assert!(answer["error"].as_str().unwrap().starts_with("Get issue failed"));
    assert_eq!(tools.call_count(), 0);
}

#[tokio::test]
async fn get_projects_action_routes_to_project_listing() {
    let chat = Arc::new(ScriptedChat::replying(&[r#"{"action": "get_projects"}"#]));
    let tools = Arc::new(RecordingTools::new());

    service(chat, tools.clone()).query_tickets("list projects").await;

    let calls = tools.calls();
    assert_eq!(calls[0].0, "jira_get_all_projects");
    assert_eq!(calls[0].1["include_archived"], Value::Bool(false));
}

#[tokio::test]
async fn unrecognized_action_defaults_to_search() {
    let chat = Arc::new(ScriptedChat::replying(&[
        r#"{"action": "get_user_profile", "project_key": "TEST"}"#,
    ]));
    let tools = Arc::new(RecordingTools::new());

    service(chat, tools.clone()).query_tickets("who am I").await;

    let calls = tools.calls();
    assert_eq!(calls[0].0, "jira_search");
    assert_eq!(calls[0].1["jql"], "project = TEST");
}

#[tokio::test]
async fn unreachable_model_surfaces_as_error_envelope() {
    // Unlike a malformed reply, a transport failure does not trigger the
    // default search; nothing is executed.
    let tools = Arc::new(RecordingTools::new());
    let report = service(Arc::new(OfflineChat), tools.clone())
        .query_tickets("show my tickets")
        .await;

    assert!(report.is_error());
    assert!(report
        .error()
        .unwrap()
        .starts_with("Failed to process query:"));
    assert_eq!(tools.call_count(), 0);
}
