//! Ticketeer CLI entry point.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::Parser;

use ticketeer::cli::{Cli, Commands};
use ticketeer::domain::ports::{ChatClient, ToolClient};
use ticketeer::infrastructure::http_server::{self, AppState};
use ticketeer::infrastructure::llm::OpenAiChatClient;
use ticketeer::infrastructure::logging;
use ticketeer::infrastructure::mcp::McpHttpClient;
use ticketeer::services::Dispatcher;
use ticketeer::{Config, ConfigLoader};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    logging::init(&config.logging);

    match cli.command {
        Commands::Ask { text } => {
            let text = text.join(" ");
            if text.trim().is_empty() {
                return Err(anyhow!("nothing to ask: provide a request"));
            }

            let (dispatcher, _tools) = build_pipeline(&config)?;
            let envelope = dispatcher.process(&text).await;
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            let (dispatcher, tools) = build_pipeline(&config)?;
            let state = AppState { dispatcher, tools };
            http_server::serve(&config.server, state).await?;
        }
        Commands::Tools => {
            let tools: Arc<dyn ToolClient> = Arc::new(McpHttpClient::new(&config.jira_mcp)?);
            let listing = tools
                .list_tools()
                .await
                .map_err(|err| anyhow!("failed to list tools: {err}"))?;

            for tool in listing {
                match tool.description {
                    Some(description) => println!("{}: {description}", tool.name),
                    None => println!("{}", tool.name),
                }
            }
        }
    }

    Ok(())
}

fn build_pipeline(config: &Config) -> Result<(Arc<Dispatcher>, Arc<dyn ToolClient>)> {
    let chat: Arc<dyn ChatClient> = Arc::new(OpenAiChatClient::new(&config.llm)?);
    let tools: Arc<dyn ToolClient> = Arc::new(McpHttpClient::new(&config.jira_mcp)?);
    let dispatcher = Arc::new(Dispatcher::new(chat, tools.clone()));
    Ok((dispatcher, tools))
}
