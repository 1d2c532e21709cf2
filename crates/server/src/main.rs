use std::{net::SocketAddr, sync::Arc};

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;
mod routes;

use app_state::{AppState, NEXT_CLICK_PATH};
use config::load_settings;

/// Frame action payloads are small signed JSON blobs; nothing in them is read.
const MAX_BODY_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = load_settings();
    let state = AppState::from_settings(&settings)?;
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(
        %addr,
        public_url = settings.public_url.as_deref().unwrap_or("<from Host header>"),
        max_clicks = settings.max_clicks,
        "frame server listening"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(routes::healthz))
        .route("/", get(routes::initial_frame))
        .route(
            "/api/index",
            get(routes::initial_frame)
                .post(routes::advance_frame)
                .fallback(routes::method_not_allowed),
        )
        .route(
            NEXT_CLICK_PATH,
            post(routes::next_click).fallback(routes::method_not_allowed),
        )
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
