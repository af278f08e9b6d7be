use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod config;
mod docs;
mod error;
mod mcp;
mod server;
mod tools;

use config::{CredentialParts, DEFAULT_API_BASE_URL, DEFAULT_TOKEN_URL, Endpoints, ServerConfig};
use docs::transport::ReqwestTransport;
use tools::Dispatcher;

#[derive(Parser)]
#[command(name = "gdocs-mcp")]
#[command(version, about = "MCP server exposing Google Docs editing tools")]
struct Cli {
    /// Google Docs API base URL
    #[arg(long, global = true, env = "GDOCS_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    api_base_url: String,
    /// OAuth token endpoint used for the refresh-token exchange
    #[arg(long, global = true, env = "GDOCS_TOKEN_URL", default_value = DEFAULT_TOKEN_URL)]
    token_url: String,
    /// Load GOOGLE_* credentials from this file
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP stdio server
    Serve {
        /// Serve MCP over stdio (NDJSON)
        #[arg(long)]
        stdio: bool,
    },
    /// List the available tools
    Tools {
        /// Print full tool definitions as JSON
        #[arg(long)]
        json: bool,
    },
    /// Invoke a single tool and print its result
    Call {
        /// Tool name, e.g. gdoc_get
        name: String,
        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        arguments: String,
        /// Output JSON structuredContent
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Some(path) = &cli.env_file {
        dotenvy::from_path(path)
            .with_context(|| format!("failed to load env file {}", path.display()))?;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ServerConfig {
        credentials: CredentialParts::from_env(),
        endpoints: Endpoints {
            api_base_url: cli.api_base_url,
            token_url: cli.token_url,
        },
    };

    match cli.command {
        Commands::Serve { stdio } => {
            if stdio {
                run_stdio_server(config).await
            } else {
                anyhow::bail!("only --stdio transport is supported")
            }
        }
        Commands::Tools { json } => print_tools(json),
        Commands::Call {
            name,
            arguments,
            json,
        } => run_call(config, &name, &arguments, json).await,
    }
}

fn dispatcher(config: ServerConfig) -> Dispatcher {
    Dispatcher::new(config, Arc::new(ReqwestTransport::new()))
}

async fn run_stdio_server(config: ServerConfig) -> Result<()> {
    tracing::info!(
        connected = config.credentials.complete().is_some(),
        api_base_url = %config.endpoints.api_base_url,
        "starting Google Docs MCP server"
    );
    let server = server::McpServer::new(dispatcher(config));
    server::run_stdio(server).await
}

fn print_tools(json_output: bool) -> Result<()> {
    let definitions = mcp::tool_definitions();
    if json_output {
        let output = serde_json::to_string_pretty(&definitions)?;
        println!("{output}");
        return Ok(());
    }

    for definition in &definitions {
        let name = definition["name"].as_str().unwrap_or_default();
        let title = definition["title"].as_str().unwrap_or_default();
        println!("{name:<30} {title}");
    }
    Ok(())
}

async fn run_call(config: ServerConfig, name: &str, arguments: &str, json: bool) -> Result<()> {
    let args: Value = serde_json::from_str(arguments).context("--arguments must be valid JSON")?;
    let result = dispatcher(config).dispatch(name, args).await;
    print_tool_result(result, json)
}

fn print_tool_result(result: Value, json_output: bool) -> Result<()> {
    let is_error = result
        .get("isError")
        .and_then(|value| value.as_bool())
        .unwrap_or(false);

    if is_error {
        let message = result
            .get("structuredContent")
            .and_then(|value| value.get("error"))
            .and_then(|value| value.get("message"))
            .and_then(|value| value.as_str())
            .unwrap_or("tool error");
        eprintln!("{message}");
        process::exit(1);
    }

    if json_output {
        let structured = result
            .get("structuredContent")
            .cloned()
            .unwrap_or_else(|| json!({}));
        let output = serde_json::to_string_pretty(&structured)?;
        println!("{output}");
        return Ok(());
    }

    let text = result
        .get("content")
        .and_then(|value| value.as_array())
        .and_then(|arr| arr.first())
        .and_then(|value| value.get("text"))
        .and_then(|value| value.as_str())
        .unwrap_or("");
    println!("{text}");
    Ok(())
}
