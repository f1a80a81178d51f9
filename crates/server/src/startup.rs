use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, ServerConfig};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::observability;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn load_bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    let raw = server.bind_addr();
    raw.parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {raw}: {e}")))
}

/// Router wired to fresh stores built from `cfg.api`.
pub fn build_app(cfg: &AppConfig) -> Router {
    let state = AppState::from_config(&cfg.api);
    routes::build_router(state, build_cors())
}

/// Public entry: build the app and serve it until the listener fails.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    observability::register_all();
    let app = build_app(&cfg);

    let addr = load_bind_addr(&cfg.server)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    info!(
        %addr,
        strict_not_found = cfg.api.strict_not_found,
        seed_people = cfg.api.seed_people,
        "people api listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
