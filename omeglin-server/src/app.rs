use crate::config::ServerConfig;
use crate::signaling::{SignalingService, ws_handler};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::error;

use crate::matchmaker::QueueStats;

pub const MATCHMAKING_PATH: &str = "/api/matchmaking";

pub struct AppState {
    pub signaling: SignalingService,
    pub ping_interval: Option<Duration>,
}

/// Spawn a matchmaker and build the full HTTP surface around it.
pub fn app(config: &ServerConfig) -> Router {
    router(SignalingService::spawn(config.command_buffer), config)
}

/// Routes for an already running signaling service.
pub fn router(signaling: SignalingService, config: &ServerConfig) -> Router {
    let state = Arc::new(AppState {
        signaling,
        ping_interval: config.ping_interval(),
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route(MATCHMAKING_PATH, get(ws_handler))
        .route("/api/stats", get(stats))
        .route("/health", get(health));

    if let Some(dir) = &config.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router.layer(cors).with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn stats(State(state): State<Arc<AppState>>) -> Result<Json<QueueStats>, StatusCode> {
    state
        .signaling
        .matchmaker()
        .stats()
        .await
        .map(Json)
        .map_err(|e| {
            error!("Stats unavailable: {}", e);
            StatusCode::SERVICE_UNAVAILABLE
        })
}
