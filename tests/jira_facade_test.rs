//! Integration tests for the tool facade's argument shaping and error
//! normalization.

mod common;

use std::sync::Arc;

use common::RecordingTools;
use serde_json::{json, Value};
use ticketeer::domain::models::{CreateParams, QueryParams, UpdateParams};
use ticketeer::domain::ports::ToolError;
use ticketeer::services::JiraFacade;

fn query_params(value: Value) -> QueryParams {
    serde_json::from_value(value).unwrap()
}

#[tokio::test]
async fn search_applies_projection_and_default_limit() {
    let tools = Arc::new(RecordingTools::new());
    let facade = JiraFacade::new(tools.clone());

    facade.search(&query_params(json!({ "jql": "project = X" }))).await;

    let args = &tools.calls()[0].1;
    assert_eq!(args["jql"], "project = X");
    assert_eq!(args["fields"], "summary,status,assignee,created,issuetype");
    assert_eq!(args["limit"], 50);
}

#[tokio::test]
async fn search_without_jql_synthesizes_one_from_filters() {
    let tools = Arc::new(RecordingTools::new());
    let facade = JiraFacade::new(tools.clone());

    facade
        .search(&query_params(json!({
            "assignee": "currentUser()",
            "status": "Open",
            "project_key": "TEST",
            "issue_type": "Bug"
        })))
        .await;

    assert_eq!(
        tools.calls()[0].1["jql"],
        "assignee = currentUser() AND status != Done AND project = TEST AND issuetype = Bug"
    );
}

#[tokio::test]
async fn transport_failure_becomes_tagged_error_mapping() {
    let tools = Arc::new(RecordingTools::with_results(vec![Err(
        ToolError::Connection("Connection failed".to_string()),
    )]));
    let facade = JiraFacade::new(tools);

    let result = facade.search(&QueryParams::default_search()).await;

    assert_eq!(result, json!({ "error": "Search failed: Connection failed" }));
}

#[tokio::test]
async fn non_json_payload_becomes_tagged_error_mapping() {
    let tools = Arc::new(RecordingTools::with_results(vec![Ok(
        "<html>gateway timeout</html>".to_string(),
    )]));
    let facade = JiraFacade::new(tools);

    let result = facade.get_issue("KAN-1").await;

    let message = result["error"].as_str().unwrap();
    assert!(message.starts_with("Get issue failed:"), "got: {message}");
}

#[tokio::test]
async fn successful_payload_is_returned_verbatim() {
    let tools = Arc::new(RecordingTools::with_results(vec![Ok(
        r#"{"issues": [{"key": "TEST-1"}], "total": 1}"#.to_string(),
    )]));
    let facade = JiraFacade::new(tools);

    let result = facade.search(&QueryParams::default_search()).await;

    assert_eq!(result, json!({ "issues": [{"key": "TEST-1"}], "total": 1 }));
}

#[tokio::test]
async fn update_issue_nests_fields_and_wraps_assignee() {
    let tools = Arc::new(RecordingTools::new());
    let facade = JiraFacade::new(tools.clone());

    let params: UpdateParams = serde_json::from_value(json!({
        "issue_key": "ABC-123",
        "summary": "New title",
        "assignee": "jane@company.com",
        "additional_fields": { "labels": ["infra"] }
    }))
    .unwrap();
    facade.update_issue(&params).await;

    let args = &tools.calls()[0].1;
    assert_eq!(args["issue_key"], "ABC-123");
    assert_eq!(args["fields"]["summary"], "New title");
    assert_eq!(args["fields"]["assignee"], json!({ "name": "jane@company.com" }));
    assert_eq!(args["additional_fields"]["labels"][0], "infra");
    assert!(args["fields"].get("description").is_none());
}

#[tokio::test]
async fn create_issue_omits_priority_and_absent_optionals() {
    let tools = Arc::new(RecordingTools::new());
    let facade = JiraFacade::new(tools.clone());

    let params: CreateParams = serde_json::from_value(json!({
        "project_key": "DEMO",
        "summary": "Login fails",
        "issue_type": "Bug",
        "priority": "High"
    }))
    .unwrap();
    facade.create_issue(&params).await;

    let args = &tools.calls()[0].1;
    assert_eq!(args["project_key"], "DEMO");
    // The create tool has no priority parameter; the field is parsed but
    // not forwarded.
    assert!(args.get("priority").is_none());
    assert!(args.get("description").is_none());
}

#[tokio::test]
async fn get_transitions_sends_only_the_issue_key() {
    let tools = Arc::new(RecordingTools::new());
    let facade = JiraFacade::new(tools.clone());

    facade.get_transitions("KAN-9").await;

    let calls = tools.calls();
    assert_eq!(calls[0].0, "jira_get_transitions");
    assert_eq!(calls[0].1, json!({ "issue_key": "KAN-9" }));
}
