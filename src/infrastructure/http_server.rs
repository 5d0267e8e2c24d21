//! HTTP surface for the gateway
//!
//! Thin axum layer over the dispatcher: it extracts the request text from
//! a query parameter and renders the envelope as JSON. All interpretation
//! logic stays behind `Dispatcher::process`.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::domain::models::ServerConfig;
use crate::domain::ports::ToolClient;
use crate::services::Dispatcher;

/// Request text used when the caller omits the `q` parameter.
pub const DEFAULT_REQUEST: &str = "Show me all open tickets assigned to me";

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub tools: Arc<dyn ToolClient>,
}

#[derive(Debug, Deserialize)]
pub struct AskQuery {
    pub q: Option<String>,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/ask", get(handle_ask))
        .route("/api/tools", get(handle_tools))
        .route("/up", get(handle_up))
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind {addr}"))?;

    info!("HTTP server listening on {addr}");

    axum::serve(listener, router(state))
        .await
        .context("HTTP server terminated")?;

    Ok(())
}

async fn handle_ask(
    State(state): State<AppState>,
    Query(query): Query<AskQuery>,
) -> Json<Value> {
    let text = query.q.unwrap_or_else(|| DEFAULT_REQUEST.to_string());
    let envelope = state.dispatcher.process(&text).await;
    Json(serde_json::to_value(&envelope).unwrap_or_else(|_| json!({})))
}

async fn handle_tools(State(state): State<AppState>) -> Json<Value> {
    match state.tools.list_tools().await {
        Ok(tools) => {
            let listing: Vec<String> = tools
                .iter()
                .map(|tool| match &tool.description {
                    Some(description) => format!("{}: {description}", tool.name),
                    None => tool.name.clone(),
                })
                .collect();
            Json(json!({ "message": listing }))
        }
        Err(err) => Json(json!({ "error": format!("Failed to list tools: {err}") })),
    }
}

async fn handle_up() -> StatusCode {
    StatusCode::OK
}
