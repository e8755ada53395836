use std::sync::Arc;

use athletics_client::config::Config;
use athletics_client::http_client::ReqwestAthleticsClient;
use athletics_mcp::AthleticsMcpHandler;
use athletics_mcp::config::{ServerConfig, log_filter};
use athletics_mcp::middleware::LoggingMiddleware;
use athletics_mcp::session::Authenticator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `ATHLETICS_LOG_LEVEL`, then `RUST_LOG`, then `info`.
    let log_env = log_filter();

    // Append per-target overrides to keep rmcp internals quiet by default
    let combined_filter = format!("{},rmcp=warn,serve_inner=warn", log_env);
    let env_filter = tracing_subscriber::EnvFilter::try_new(combined_filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,rmcp=warn,serve_inner=warn"));
    // stdout carries the MCP protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::info!("athletics_mcp: log filter: {}", log_env);

    let client_config = Config::from_env()?;
    let server_config = ServerConfig::from_env()?;
    if server_config.admin_password.is_none() {
        tracing::warn!("ATHLETICS_ADMIN_PASSWORD not set; the server is read-only");
    }

    let client = LoggingMiddleware::new(ReqwestAthleticsClient::from_config(&client_config)?);
    let handler = AthleticsMcpHandler::new(
        Arc::new(client),
        Authenticator::from_config(&server_config),
    );

    tracing::info!(
        store = %client_config.base_url,
        "athletics_mcp: registered {} tools and {} prompts",
        handler.tool_count(),
        handler.prompt_count()
    );

    tracing::info!("athletics_mcp: starting stdio MCP server...");

    use rmcp::serve_server;
    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let server = serve_server(handler, transport).await?;

    tracing::info!("athletics_mcp: service initialized as server");

    server.waiting().await?;

    Ok(())
}
