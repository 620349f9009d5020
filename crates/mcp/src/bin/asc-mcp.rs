// App Store Connect MCP server binary

use anyhow::Result;
use asc_mcp::{build_registry, Args, McpServer, ServerConfig};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "asc_mcp=info,asc_sdk=info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let config = ServerConfig::resolve(args)?;
    let client = config.build_client()?;

    tracing::info!(
        base_url = %config.base_url,
        key_id = %config.credentials.key_id,
        read_only = config.read_only,
        "App Store Connect MCP server starting"
    );

    let registry = build_registry(Arc::new(client), config.read_only);
    McpServer::new(registry).start().await
}
