use axum::debug_handler;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tower_http::timeout::TimeoutLayer;
use tracing::info;

use athletics_client::config::Config;
use athletics_client::http_client::ReqwestAthleticsClient;
use athletics_client::observability::Health;
use athletics_client::{AthleticsClient, AthleticsError};
use athletics_mcp::AthleticsMcpHandler;
use athletics_mcp::config::{ServerConfig, log_filter};
use athletics_mcp::middleware::LoggingMiddleware;
use athletics_mcp::session::Authenticator;
use athletics_mcp::views::{self, AgeBandView, DisciplineView, ParticipantView, ResultView};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

struct AppState {
    client: Arc<dyn AthleticsClient>,
    metrics: PrometheusHandle,
}

#[debug_handler]
async fn health() -> impl IntoResponse {
    if Health::readiness().ready {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not ready")
    }
}

#[debug_handler]
async fn metrics_endpoint(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let body = state.metrics.render();
    ([("content-type", "text/plain; version=0.0.4")], body)
}

#[debug_handler]
async fn list_participants(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ParticipantView>>, (StatusCode, String)> {
    let participants = state.client.list_participants().await.map_err(map_err)?;
    Ok(Json(participants.iter().map(ParticipantView::from).collect()))
}

#[debug_handler]
async fn get_participant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ParticipantView>, (StatusCode, String)> {
    let p = state.client.get_participant(id).await.map_err(map_err)?;
    Ok(Json(ParticipantView::from(&p)))
}

#[debug_handler]
async fn list_disciplines(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DisciplineView>>, (StatusCode, String)> {
    let disciplines = state.client.list_disciplines().await.map_err(map_err)?;
    Ok(Json(disciplines.iter().map(DisciplineView::from).collect()))
}

#[debug_handler]
async fn list_results(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ResultView>>, (StatusCode, String)> {
    let results = state.client.list_results().await.map_err(map_err)?;
    Ok(Json(results.iter().map(ResultView::from).collect()))
}

#[debug_handler]
async fn age_groups() -> Json<Vec<AgeBandView>> {
    Json(views::age_bands())
}

fn map_err(e: AthleticsError) -> (StatusCode, String) {
    let status = match &e {
        AthleticsError::NotFound(_) => StatusCode::NOT_FOUND,
        AthleticsError::Auth(_) => StatusCode::UNAUTHORIZED,
        AthleticsError::InvalidInput(_) | AthleticsError::Measurement(_) => {
            StatusCode::BAD_REQUEST
        }
        AthleticsError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        AthleticsError::Http(_) | AthleticsError::Decode(_) | AthleticsError::Api { .. } => {
            StatusCode::BAD_GATEWAY
        }
    };
    (status, e.to_string())
}

#[cfg(test)]
#[allow(clippy::items_after_test_module)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_http_statuses() {
        assert_eq!(
            map_err(AthleticsError::NotFound("p".into())).0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            map_err(AthleticsError::from_status(503, String::new())).0,
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            map_err(AthleticsError::InvalidInput("x".into())).0,
            StatusCode::BAD_REQUEST
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let log_env = log_filter();
    let env_filter = tracing_subscriber::EnvFilter::try_new(log_env.clone())
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,rmcp=warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::info!(%log_env, "athletics_mcp:http: log filter");

    let handle = PrometheusBuilder::new().install_recorder()?;

    let client_config = Config::from_env()?;
    let server_config = ServerConfig::from_env()?;
    if server_config.admin_password.is_none() {
        tracing::warn!("ATHLETICS_ADMIN_PASSWORD not set; MCP sessions are read-only");
    }

    let client: Arc<dyn AthleticsClient> = Arc::new(LoggingMiddleware::new(
        ReqwestAthleticsClient::from_config(&client_config)?,
    ));
    let state = Arc::new(AppState {
        client: client.clone(),
        metrics: handle,
    });

    // Every MCP connection gets its own handler and therefore its own session.
    let handler = AthleticsMcpHandler::new(client, Authenticator::from_config(&server_config));
    let factory = move || -> Result<_, std::io::Error> { Ok(handler.fresh_session()) };
    let session = std::sync::Arc::new(
        rmcp::transport::streamable_http_server::session::local::LocalSessionManager::default(),
    );
    let mcp_service = rmcp::transport::streamable_http_server::tower::StreamableHttpService::new(
        factory,
        session,
        rmcp::transport::streamable_http_server::tower::StreamableHttpServerConfig::default(),
    );

    // The timeout only covers plain request/response routes; MCP streams stay open.
    let api = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics_endpoint))
        .route("/participants", get(list_participants))
        .route("/participants/{id}", get(get_participant))
        .route("/disciplines", get(list_disciplines))
        .route("/results", get(list_results))
        .route("/age-groups", get(age_groups))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .with_state(state);
    let app = api.nest_service("/mcp", mcp_service);

    let addr = server_config.address;
    info!(%addr, store = %client_config.base_url, "starting HTTP server");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to address {addr}: {e}");
            std::process::exit(1);
        }
    };

    let server = axum::serve(listener, app.into_make_service());
    if let Err(e) = server
        .with_graceful_shutdown(async {
            if let Err(e) = signal::ctrl_c().await {
                tracing::error!("failed to install ctrl+c handler: {e}");
                std::future::pending::<()>().await;
            }
        })
        .await
    {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
