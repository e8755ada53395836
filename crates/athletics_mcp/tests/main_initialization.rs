//! Start-up wiring shared by the stdio and HTTP binaries.

use std::sync::Arc;

use athletics_client::config::Config;
use athletics_client::http_client::ReqwestAthleticsClient;
use athletics_mcp::AthleticsMcpHandler;
use athletics_mcp::config::{ServerConfig, log_filter_with};
use athletics_mcp::middleware::LoggingMiddleware;
use athletics_mcp::session::Authenticator;

#[test]
fn log_level_env_takes_priority_over_rust_log() {
    let filter = log_filter_with(|k| match k {
        "ATHLETICS_LOG_LEVEL" => Some("trace".into()),
        "RUST_LOG" => Some("error".into()),
        _ => None,
    });
    assert_eq!(filter, "trace");
}

#[test]
fn combined_filter_is_accepted_by_env_filter() {
    for level in ["trace", "debug", "info", "warn", "error"] {
        let combined = format!("{},rmcp=warn,serve_inner=warn", level);
        assert!(tracing_subscriber::EnvFilter::try_new(&combined).is_ok());
    }
}

#[test]
fn invalid_filter_falls_back() {
    let env_filter = tracing_subscriber::EnvFilter::try_new("invalid[[[filter")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,rmcp=warn,serve_inner=warn"));
    assert!(!format!("{:?}", env_filter).is_empty());
}

#[test]
fn client_config_defaults_to_local_store() {
    let cfg = Config::from_env_with(|_| None).expect("config");
    assert_eq!(cfg.base_url, "http://localhost:8081");
}

#[tokio::test]
async fn handler_initialization() {
    let client_cfg = Config::from_env_with(|_| None).expect("config");
    let server_cfg = ServerConfig::from_env_with(|k| {
        (k == "ATHLETICS_ADMIN_PASSWORD").then(|| "pw".to_string())
    })
    .expect("server config");

    let client = ReqwestAthleticsClient::from_config(&client_cfg).expect("client");
    let handler = AthleticsMcpHandler::new(
        Arc::new(LoggingMiddleware::new(client)),
        Authenticator::from_config(&server_cfg),
    );

    assert!(handler.tool_count() > 0);
    assert_eq!(handler.prompt_count(), 2);
}
